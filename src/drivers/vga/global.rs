//! # Console Compartilhado
//!
//! Extensão para quando há mais de um escritor.
//!
//! O console de boot é um valor local do entry point. Depois da mensagem
//! de boot ele pode ser instalado aqui, atrás de um `spin::Mutex`, para que
//! `kprint!` e o código C de bring-up continuem no mesmo cursor.
//!
//! ## Regras
//!
//! - Instalação única: a segunda chamada a [`install`] falha.
//! - Sem console instalado, toda escrita é descartada silenciosamente.

use core::ffi::{c_char, CStr};
use core::fmt;

use spin::Mutex;

use super::buffer::MmioBuffer;
use super::error::DisplayError;
use super::writer::Console;

/// Console de hardware compartilhado.
pub static CONSOLE: Mutex<Option<Console<MmioBuffer>>> = Mutex::new(None);

/// Instala o console compartilhado.
pub fn install(console: Console<MmioBuffer>) -> Result<(), DisplayError> {
    let mut slot = CONSOLE.lock();
    if slot.is_some() {
        crate::kwarn!("(VGA) Console compartilhado ja instalado");
        return Err(DisplayError::AlreadyInstalled);
    }
    crate::kdebug!("(VGA) Console instalado, cursor=", console.cursor());
    *slot = Some(console);
    Ok(())
}

/// Executa `f` com o console compartilhado, se instalado.
pub fn with_console<R>(f: impl FnOnce(&mut Console<MmioBuffer>) -> R) -> Option<R> {
    CONSOLE.lock().as_mut().map(f)
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    // Console::write_str nunca falha.
    let _ = with_console(|console| console.write_fmt(args));
}

/// Escreve no console compartilhado (sem newline).
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        $crate::drivers::vga::global::_print(format_args!($($arg)*))
    };
}

// =============================================================================
// C ABI
// =============================================================================

/// Escreve um caractere no console compartilhado.
#[no_mangle]
pub extern "C" fn spark_putc(sym: c_char) {
    with_console(|console| console.write_byte(sym as u8));
}

/// Escreve uma string terminada em NUL no console compartilhado.
///
/// # Safety
/// `s` deve ser nulo ou apontar para uma C string válida.
#[no_mangle]
pub unsafe extern "C" fn spark_puts(s: *const c_char) {
    if s.is_null() {
        return;
    }
    let s = CStr::from_ptr(s);
    with_console(|console| console.print_cstr(s));
}
