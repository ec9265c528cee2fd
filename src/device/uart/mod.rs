// Copyright (c) 2025 Syswonder
// hvisor is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//     http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR
// FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
//
// Syswonder Website:
//      https://www.syswonder.org
//
// Authors:
//
mod pl011;

pub use pl011::{console, console_putchar, Pl011Uart};

use core::ffi::CStr;

/// Transmit side of a UART.
///
/// Implemented by the real MMIO handle and, in tests, by a mock that
/// records the stores it receives.
pub trait UartTx {
    /// Push one byte into the transmit data register.
    fn putchar(&mut self, c: u8);

    /// Transmit every byte of `s` in order. The terminating NUL marks the
    /// end of the message and is not sent; `&CStr` guarantees it exists,
    /// so the walk is always bounded.
    fn write_cstr(&mut self, s: &CStr) {
        for &c in s.to_bytes() {
            self.putchar(c);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::UartTx;

    /// Stand-in data register that keeps every store in arrival order.
    #[derive(Default)]
    pub(crate) struct MockUart {
        pub(crate) sent: Vec<u8>,
    }

    impl UartTx for MockUart {
        fn putchar(&mut self, c: u8) {
            self.sent.push(c);
        }
    }

    #[test]
    fn write_cstr_stores_bytes_in_order() {
        let mut uart = MockUart::default();
        uart.write_cstr(c"Hi\n");
        assert_eq!(uart.sent, [0x48, 0x69, 0x0a]);
    }

    #[test]
    fn empty_string_stores_nothing() {
        let mut uart = MockUart::default();
        uart.write_cstr(c"");
        assert!(uart.sent.is_empty());
    }

    #[test]
    fn sentinel_is_not_transmitted() {
        let mut uart = MockUart::default();
        uart.write_cstr(c"AB");
        assert_eq!(uart.sent, b"AB");
        assert!(!uart.sent.contains(&0));
    }

    #[test]
    fn consecutive_writes_do_not_reorder() {
        let mut uart = MockUart::default();
        uart.write_cstr(c"A");
        uart.write_cstr(c"B");
        assert_eq!(uart.sent, b"AB");
    }
}
