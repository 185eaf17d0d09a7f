// =============================================================================
// SERIAL DRIVER - ZERO OVERHEAD
// =============================================================================
//
// Driver de Porta Serial (COM1) para logging do early-boot.
//
// ARQUITETURA:
// - SEM Mutex/Spinlock - Escrita direta via I/O ports
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação - Apenas strings e valores imediatos
// - NUNCA escreve no buffer VGA (o console de texto é só da mensagem de boot)
//
// ALVOS:
// Em bare-metal x86_64 os bytes vão para a COM1 via `in`/`out`.
// Em qualquer outro alvo (ex: testes no host) as primitivas de porta são
// inertes: a leitura de status sempre diz "pronto" e a escrita é descartada.
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal
// - emit_dec(v)      : Envia usize em decimal
// - emit_nl()        : Envia newline (\r\n)
//
// =============================================================================

use crate::core::config::COM1_BASE;

// Porta de dados da COM1
const COM1_DATA: u16 = COM1_BASE;

// Porta de status da COM1 (Line Status Register)
const COM1_STATUS: u16 = COM1_BASE + 5;

// Bit 5 do LSR: buffer de transmissão vazio
const LSR_THR_EMPTY: u8 = 0x20;

// =============================================================================
// FUNÇÕES DE INICIALIZAÇÃO
// =============================================================================

/// Inicializa a porta serial COM1 (UART 16550).
///
/// Deve ser chamada uma vez durante o early-boot.
/// Configura: 38400 baud, 8N1, FIFO habilitado.
pub fn init() {
    unsafe {
        // Disable interrupts
        port_out(COM1_DATA + 1, 0x00);

        // Enable DLAB (set baud rate divisor)
        port_out(COM1_DATA + 3, 0x80);

        // Set divisor to 3 (lo byte) = 38400 baud
        port_out(COM1_DATA, 0x03);

        // (hi byte)
        port_out(COM1_DATA + 1, 0x00);

        // 8 bits, no parity, one stop bit
        port_out(COM1_DATA + 3, 0x03);

        // Enable FIFO, clear them, with 14-byte threshold
        port_out(COM1_DATA + 2, 0xC7);

        // RTS/DSR set
        port_out(COM1_DATA + 4, 0x03);
    }
}

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

/// Envia um único byte para a porta serial.
///
/// Esta é a função mais baixo nível. Todas as outras funções
/// de escrita usam esta internamente.
#[inline(always)]
pub fn emit(byte: u8) {
    unsafe {
        // Espera o buffer de transmissão estar vazio (busy wait)
        while port_in(COM1_STATUS) & LSR_THR_EMPTY == 0 {
            core::hint::spin_loop();
        }
        port_out(COM1_DATA, byte);
    }
}

/// Envia uma string para a porta serial.
#[inline(never)]
pub fn emit_str(s: &str) {
    for &byte in s.as_bytes() {
        emit(byte);
    }
}

/// Envia uma nova linha (CRLF) para a porta serial.
#[inline(never)]
pub fn emit_nl() {
    emit(b'\r');
    emit(b'\n');
}

// =============================================================================
// FUNÇÕES DE ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

/// Envia um valor u64 em formato hexadecimal.
///
/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
#[inline(never)]
pub fn emit_hex(value: u64) {
    emit(b'0');
    emit(b'x');
    let mut shift = 60;
    loop {
        emit(nibble_to_ascii(((value >> shift) & 0xF) as u8));
        if shift == 0 {
            break;
        }
        shift -= 4;
    }
}

/// Envia um valor usize em formato decimal.
///
/// # Nota
/// Esta função usa um buffer de stack de 20 bytes (máximo para u64).
#[inline(never)]
pub fn emit_dec(mut value: usize) {
    let mut buf: [u8; 20] = [0; 20];
    let mut pos = 20;

    if value == 0 {
        emit(b'0');
        return;
    }

    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }

    for &digit in &buf[pos..] {
        emit(digit);
    }
}

// =============================================================================
// FUNÇÕES AUXILIARES
// =============================================================================

/// Converte nibble (0-15) para caractere ASCII ('0'-'9', 'A'-'F').
#[inline(always)]
const fn nibble_to_ascii(n: u8) -> u8 {
    if n < 10 {
        b'0' + n
    } else {
        b'A' + (n - 10)
    }
}

/// Escreve byte diretamente na porta I/O.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[inline(always)]
unsafe fn port_out(port: u16, value: u8) {
    core::arch::asm!(
        "out dx, al",
        in("al") value,
        in("dx") port,
        options(nostack, nomem, preserves_flags)
    );
}

/// Lê byte diretamente da porta I/O.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[inline(always)]
unsafe fn port_in(port: u16) -> u8 {
    let value: u8;
    core::arch::asm!(
        "in al, dx",
        out("al") value,
        in("dx") port,
        options(nostack, nomem, preserves_flags)
    );
    value
}

#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
#[inline(always)]
unsafe fn port_out(_port: u16, _value: u8) {}

#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
#[inline(always)]
unsafe fn port_in(_port: u16) -> u8 {
    LSR_THR_EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles_map_to_uppercase_hex() {
        assert_eq!(nibble_to_ascii(0), b'0');
        assert_eq!(nibble_to_ascii(9), b'9');
        assert_eq!(nibble_to_ascii(10), b'A');
        assert_eq!(nibble_to_ascii(15), b'F');
    }

    #[test]
    fn emitters_are_inert_on_host() {
        init();
        emit_str("(Serial) host");
        emit_hex(0xDEAD_BEEF);
        emit_dec(0);
        emit_dec(4000);
        emit_nl();
    }
}
