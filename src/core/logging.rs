// =============================================================================
// EARLY-BOOT LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging do console de early-boot com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação
// - Escreve APENAS na serial (nunca no buffer de texto VGA)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada operação)
//
// FEATURES:
// - no_logs:   Remove 100% dos logs
// - log_error: ERROR, WARN, [OK]/[FAIL]
// - log_info:  + INFO
// - log_debug: + DEBUG
// - log_trace: Todos os níveis (padrão)
//
// COMO USAR:
//   kinfo!("(VGA) Console pronto");            // Apenas string
//   kinfo!("(VGA) Cursor=", cursor);           // String + hex
//   klog!("Base=", base, " Len=", len);        // Múltiplos valores
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";
pub const P_OK: &str = "\x1b[32m[OK]\x1b[0m ";
pub const P_FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m ";

/// Emite uma linha completa: prefixo + mensagem + newline.
#[doc(hidden)]
#[inline(never)]
pub fn emit_line(prefix: &str, msg: &str) {
    crate::drivers::serial::emit_str(prefix);
    crate::drivers::serial::emit_str(msg);
    crate::drivers::serial::emit_nl();
}

/// Emite uma linha com valor em hexadecimal.
#[doc(hidden)]
#[inline(never)]
pub fn emit_line_hex(prefix: &str, msg: &str, value: u64) {
    crate::drivers::serial::emit_str(prefix);
    crate::drivers::serial::emit_str(msg);
    crate::drivers::serial::emit_hex(value);
    crate::drivers::serial::emit_nl();
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_ERROR, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_ERROR, $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_WARN, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_WARN, $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(not(any(feature = "no_logs", feature = "log_error")))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_INFO, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_INFO, $msg, $val as u64);
    }};
}

#[cfg(any(feature = "no_logs", feature = "log_error"))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_trace", feature = "log_debug"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_DEBUG, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_DEBUG, $msg, $val as u64);
    }};
}

#[cfg(not(any(feature = "log_trace", feature = "log_debug")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_TRACE, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_TRACE, $msg, $val as u64);
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// klog! - Log genérico sem prefixo de nível.
///
/// Útil para construir logs com múltiplos valores.
///
/// # Uso
/// ```rust
/// klog!("Addr=", addr);                    // String + hex
/// klog!("Start=", start, " End=", end);    // Múltiplos
/// ```
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! klog {
    ($msg:expr) => {{
        $crate::drivers::serial::emit_str($msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::drivers::serial::emit_str($msg);
        $crate::drivers::serial::emit_hex($val as u64);
    }};
    ($msg1:expr, $val:expr, $msg2:expr) => {{
        $crate::drivers::serial::emit_str($msg1);
        $crate::drivers::serial::emit_hex($val as u64);
        $crate::drivers::serial::emit_str($msg2);
    }};
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        $crate::drivers::serial::emit_str($msg1);
        $crate::drivers::serial::emit_hex($val1 as u64);
        $crate::drivers::serial::emit_str($msg2);
        $crate::drivers::serial::emit_hex($val2 as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! klog {
    ($($t:tt)*) => {{}};
}

/// knl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! knl {
    () => {{
        $crate::drivers::serial::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! knl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_OK, $msg);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_FAIL, $msg);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
