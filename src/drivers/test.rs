//! Testes do Console VGA
//!
//! Executados no boot (feature `self_test`) contra um buffer em memória,
//! antes de tocar no hardware.

use crate::core::config::TEXT_BUFFER_BYTES;
use crate::drivers::vga::{Attribute, Console};
use crate::klib::test_framework::{run_test_suite, TestCase, TestResult, TestSummary};

/// Casos de teste do console
const DRIVER_TESTS: &[TestCase] = &[
    TestCase::new("vga_default_attribute", test_default_attribute),
    TestCase::new("vga_hi_scenario", test_hi_scenario),
    TestCase::new("vga_empty_string", test_empty_string),
    TestCase::new("vga_concatenation", test_concatenation),
    TestCase::new("vga_nul_terminator", test_nul_terminator),
];

/// Executa todos os testes de drivers
pub fn run_driver_tests() -> TestSummary {
    run_test_suite("Drivers", DRIVER_TESTS)
}

fn scratch() -> Console<[u8; TEXT_BUFFER_BYTES]> {
    Console::new([0u8; TEXT_BUFFER_BYTES])
}

/// Atributo fixo deve ser 0x0F
fn test_default_attribute() -> TestResult {
    if Attribute::DEFAULT.bits() != 0x0F {
        crate::kerror!("(VGA) Atributo padrao incorreto: ", Attribute::DEFAULT.bits());
        return TestResult::Failed;
    }
    TestResult::Passed
}

/// "Hi" a partir do cursor 0
fn test_hi_scenario() -> TestResult {
    let mut console = scratch();
    console.print_string(b"Hi\0");

    if console.buffer()[..4] != [b'H', 0x0F, b'i', 0x0F] {
        crate::kerror!("(VGA) Celulas de 'Hi' incorretas");
        return TestResult::Failed;
    }
    if console.cursor() != 4 {
        crate::kerror!("(VGA) Cursor apos 'Hi'=", console.cursor());
        return TestResult::Failed;
    }
    TestResult::Passed
}

/// String vazia a partir do cursor 4
fn test_empty_string() -> TestResult {
    let mut console = scratch();
    console.print_string(b"Hi");
    console.print_string(b"\0");

    if console.cursor() != 4 || console.buffer()[4] != 0 {
        crate::kerror!("(VGA) String vazia alterou o buffer, cursor=", console.cursor());
        return TestResult::Failed;
    }
    TestResult::Passed
}

/// Duas chamadas seguidas == concatenação
fn test_concatenation() -> TestResult {
    let mut split = scratch();
    split.print_string(b"Spark ");
    split.print_string(b"boot");

    let mut joined = scratch();
    joined.print_string(b"Spark boot");

    if split.cursor() != joined.cursor() || split.buffer()[..] != joined.buffer()[..] {
        crate::kerror!("(VGA) Concatenacao divergente, cursor=", split.cursor());
        return TestResult::Failed;
    }
    TestResult::Passed
}

/// Nada depois do NUL é escrito
fn test_nul_terminator() -> TestResult {
    let mut console = scratch();
    console.print_string(b"ok\0lixo");

    if console.cells_written() != 2 {
        crate::kerror!("(VGA) Escreveu alem do terminador: ", console.cells_written());
        return TestResult::Failed;
    }
    crate::ktrace!("(VGA) Terminador respeitado, cursor=", console.cursor());
    TestResult::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_self_tests_pass() {
        let summary = run_driver_tests();
        assert_eq!(summary.passed, DRIVER_TESTS.len());
        assert!(summary.all_passed());
    }
}
