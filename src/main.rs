//! Spark — Binário Principal.
//!
//! Em bare-metal (`target_os = "none"`) exporta `_start`, que o bring-up da
//! plataforma chama com a stack já configurada, e o `#[panic_handler]`.
//!
//! Em alvos hospedados gera um preview: renderiza a mensagem de boot num
//! buffer em memória e imprime a primeira linha.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use spark::core as spark_core;

/// Ponto de entrada chamado pelo bring-up.
#[cfg(target_os = "none")]
#[no_mangle]
#[link_section = ".text._start"]
pub extern "C" fn _start() -> ! {
    spark_core::entry::boot_main()
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &::core::panic::PanicInfo) -> ! {
    spark_core::panic::report(info)
}

#[cfg(not(target_os = "none"))]
fn main() {
    use spark::core::config::{CELL_SIZE, TEXT_BUFFER_BYTES, TEXT_COLUMNS};
    use spark::Console;

    let mut console = Console::new([0u8; TEXT_BUFFER_BYTES]);
    spark_core::entry::print_banner(&mut console);

    let row: String = console.buffer()[..TEXT_COLUMNS * CELL_SIZE]
        .chunks(CELL_SIZE)
        .map(|cell| match cell[0] {
            0 => ' ',
            b => b as char,
        })
        .collect();
    println!("{}", row.trim_end());
    println!("cursor={} cells={}", console.cursor(), console.cells_written());
}
