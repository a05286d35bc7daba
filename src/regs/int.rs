// Copyright 2025 The Axvisor Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Temperature interrupt registers.
//! The TMON block raises its interrupt when the measured temperature leaves the
//! window described by the low and high thresholds in `INT_THRESH`, for every
//! source enabled in `EN_TEMP_INT_SRCS`. The code sampled at that moment is
//! latched into `TEMP_INT_CODE`.

use tock_registers::LocalRegisterCopy;
use tock_registers::register_bitfields;
use tock_registers::registers::{ReadOnly, ReadWrite};

register_bitfields! {
    u32,
    pub EN_TEMP_INT_SRCS [
        /// Reserved
        Reserved OFFSET(2) NUMBITS(30) [],
        /// Interrupt when the temperature rises to the high threshold.
        High OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt when the temperature falls to the low threshold.
        Low OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
    ],
    pub INT_THRESH [
        Reserved1 OFFSET(27) NUMBITS(5) [],
        /// High threshold code, bits 17 through 26.
        High OFFSET(17) NUMBITS(10) [],
        Reserved0 OFFSET(11) NUMBITS(6) [],
        /// Low threshold code, bits 1 through 10.
        Low OFFSET(1) NUMBITS(10) [],
    ],
    pub TEMP_INT_CODE [
        /// Code measured when the last temperature interrupt fired.
        Code OFFSET(0) NUMBITS(10) [],
    ]
}

/// Temperature Interrupt Source Enable Register (offset 14H) using MMIO.
pub type TempIntSrcsRegisterMmio = ReadWrite<u32, EN_TEMP_INT_SRCS::Register>;

/// A read-write copy of the Temperature Interrupt Source Enable Register.
///
/// This behaves very similarly to a MMIO read-write register, but instead of doing a
/// volatile read to MMIO to get the value for each function call, a copy of the
/// register contents are stored locally in memory.
#[allow(dead_code)]
pub type TempIntSrcsRegisterLocal = LocalRegisterCopy<u32, EN_TEMP_INT_SRCS::Register>;

/// Temperature Interrupt Threshold Register (offset 18H) using MMIO.
/// The low and high thresholds share this register.
pub type IntThreshRegisterMmio = ReadWrite<u32, INT_THRESH::Register>;

/// A read-write copy of the Temperature Interrupt Threshold Register.
#[allow(dead_code)]
pub type IntThreshRegisterLocal = LocalRegisterCopy<u32, INT_THRESH::Register>;

/// Temperature Interrupt Code Register (offset 1CH) using MMIO.
pub type TempIntCodeRegisterMmio = ReadOnly<u32, TEMP_INT_CODE::Register>;
