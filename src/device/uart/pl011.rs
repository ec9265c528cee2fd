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
use tock_registers::interfaces::Writeable;
use tock_registers::register_structs;
use tock_registers::registers::WriteOnly;

use crate::device::uart::UartTx;
use crate::memory::addr::VirtAddr;
use crate::platform::BOARD_UART_BASE;
use spin::Mutex;

lazy_static! {
    static ref UART: Mutex<Pl011Uart> = Mutex::new(Pl011Uart::new(BOARD_UART_BASE as VirtAddr));
}

register_structs! {
    /// Transmit-only view of the PL011. Only UARTDR is mapped; QEMU
    /// transmits a byte on every store to it, no readiness check needed.
    Pl011UartRegs {
        (0x00 => dr: WriteOnly<u32>),
        (0x04 => @END),
    }
}

/// Handle for the transmit data register at a fixed bus address.
///
/// Deliberately not `Copy` or `Clone`: one handle per register, and the
/// only thing it can do is store a byte. `WriteOnly` keeps reads and
/// pointer arithmetic out of reach entirely.
pub struct Pl011Uart {
    base_vaddr: VirtAddr,
}

impl Pl011Uart {
    const fn new(base_vaddr: VirtAddr) -> Self {
        Self { base_vaddr }
    }

    fn regs(&self) -> &Pl011UartRegs {
        unsafe { &*(self.base_vaddr as *const _) }
    }
}

impl UartTx for Pl011Uart {
    fn putchar(&mut self, c: u8) {
        self.regs().dr.set(c as u32)
    }
}

pub fn console_putchar(c: u8) {
    UART.lock().putchar(c)
}

/// Exclusive guard over the board console. Holding it across a batch of
/// writes keeps other writers from interleaving with the batch.
pub fn console() -> spin::MutexGuard<'static, Pl011Uart> {
    UART.lock()
}

#[cfg(test)]
mod tests {
    use super::Pl011UartRegs;

    #[test]
    fn register_block_maps_only_the_data_register() {
        assert_eq!(core::mem::size_of::<Pl011UartRegs>(), 4);
    }
}
