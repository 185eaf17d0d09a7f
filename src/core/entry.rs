//! Entry Point Lógico do Early-Boot.
//!
//! Primeiro código Rust executado depois que o bring-up da plataforma
//! transfere o controle.
//!
//! # Responsabilidades
//! 1. **Logs**: Inicializa a serial (todo diagnóstico extra vai para lá).
//! 2. **Auto-teste**: Valida o console contra um buffer em memória (`self_test`).
//! 3. **Mensagem**: Uma única chamada de `print_string` com [`BOOT_MESSAGE`].
//! 4. **Handoff**: Instala o console para `kprint!` e trava a CPU.

use core::ffi::CStr;

use crate::drivers::vga::{self, Console, MmioBuffer, TextBuffer};

/// Mensagem fixa de diagnóstico.
pub const BOOT_MESSAGE: &CStr = c"Spark early console online.";

/// Imprime a mensagem de boot no console.
pub fn print_banner<B: TextBuffer>(console: &mut Console<B>) {
    console.print_cstr(BOOT_MESSAGE);

    crate::ktrace!("(Boot) Cursor apos mensagem=", console.cursor());
    if console.overflowed() {
        crate::kwarn!("(Boot) Mensagem passou do fim do buffer de texto");
    }
}

/// Função principal do early-boot.
///
/// Chamada pelo `_start` do binário. Não retorna.
pub fn boot_main() -> ! {
    crate::drivers::serial::init();
    crate::kinfo!("Spark - console de early-boot");

    #[cfg(feature = "self_test")]
    {
        if !crate::drivers::test::run_driver_tests().all_passed() {
            crate::kerror!("(Boot) Auto-teste do console falhou; seguindo mesmo assim");
        }
    }

    // SAFETY: O bring-up deixa 0xB8000 mapeado e ninguém mais escreve nele.
    let mut console = Console::new(unsafe { MmioBuffer::legacy_vga() });
    print_banner(&mut console);
    crate::kok!("(Boot) Mensagem de boot escrita");

    if let Err(e) = vga::install(console) {
        crate::kerror!(e.as_str());
    }

    halt()
}

/// Trava a CPU.
pub fn halt() -> ! {
    loop {
        #[cfg(all(target_arch = "x86_64", target_os = "none"))]
        unsafe {
            core::arch::asm!("cli", "hlt", options(nomem, nostack));
        }

        #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
        core::hint::spin_loop();
    }
}
