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
use core::ffi::CStr;

use crate::device::uart::UartTx;

const HELLO: &CStr = c"Hello world!\n";
const QUIT_HINT: &CStr = c"Ctrl+A X to quit qemu\n";

/// Writes the boot banner, one message after the other.
pub fn boot_banner<U: UartTx>(uart: &mut U) {
    uart.write_cstr(HELLO);
    uart.write_cstr(QUIT_HINT);
}

/// Reached from the platform boot code with the stack already set up.
#[cfg(target_os = "none")]
#[no_mangle]
pub extern "C" fn start() -> ! {
    boot_banner(&mut *crate::device::uart::console());
    crate::logging::init();
    info!("Booted on {}", crate::platform::BOARD_NAME);
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::boot_banner;
    use crate::device::uart::tests::MockUart;

    #[test]
    fn banner_messages_arrive_back_to_back() {
        let mut uart = MockUart::default();
        boot_banner(&mut uart);
        let mut expected = b"Hello world!\n".to_vec();
        expected.extend_from_slice(b"Ctrl+A X to quit qemu\n");
        assert_eq!(uart.sent, expected);
    }
}
