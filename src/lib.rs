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
//! Transmit-only PL011 console for the QEMU VersatilePB board.
//!
//! The board maps UART0 at `0x101f1000`; QEMU transmits a byte on every
//! store to the data register, so a working serial console needs nothing
//! beyond ordered volatile writes. Unit tests run on the host against a
//! recording mock, which is why the crate is only `no_std` outside of tests.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
pub mod logging;
pub mod device;
pub mod entry;
pub mod memory;
#[cfg(target_os = "none")]
mod panic;
pub mod platform;

pub use device::uart::{console_putchar, UartTx};
