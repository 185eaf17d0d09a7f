//! Panic Report.
//!
//! O `#[panic_handler]` vive no binário; aqui fica o relatório.
//!
//! # Comportamento
//! 1. Loga local e mensagem na Serial (nunca no VGA).
//! 2. Trava a CPU (hlt loop).

use core::panic::PanicInfo;

/// Adaptador `fmt::Write` sobre a serial.
#[cfg(not(feature = "no_logs"))]
struct SerialWriter;

#[cfg(not(feature = "no_logs"))]
impl core::fmt::Write for SerialWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        crate::drivers::serial::emit_str(s);
        Ok(())
    }
}

/// Loga o panic e trava.
pub fn report(info: &PanicInfo) -> ! {
    crate::kerror!("================ EARLY-BOOT PANIC ================");

    if let Some(location) = info.location() {
        crate::kerror!(location.file());
        crate::kerror!("Linha: ", location.line());
    } else {
        crate::kerror!("Location: Unknown");
    }

    #[cfg(not(feature = "no_logs"))]
    {
        use core::fmt::Write;
        crate::drivers::serial::emit_str(crate::core::logging::P_ERROR);
        let _ = write!(SerialWriter, "{}", info.message());
        crate::drivers::serial::emit_nl();
    }

    crate::kerror!("==================================================");

    crate::core::entry::halt()
}
