//! Over-temperature reset registers.
//! When enabled, the chip resets itself once the temperature rises to the
//! threshold in `RESET_THRESH`, without software involvement.

use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

register_bitfields! {
    u32,
    pub EN_OVERTEMP_RESET [
        Reserved OFFSET(1) NUMBITS(31) [],
        /// Reset the chip when the temperature reaches the reset threshold.
        Enable OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
    ],
    pub RESET_THRESH [
        Reserved1 OFFSET(11) NUMBITS(21) [],
        /// Reset threshold code, bits 1 through 10.
        Thresh OFFSET(1) NUMBITS(10) [],
        Reserved0 OFFSET(0) NUMBITS(1) [],
    ]
}

/// Over-temperature Reset Enable Register (offset 04H) using MMIO.
pub type OvertempResetRegisterMmio = ReadWrite<u32, EN_OVERTEMP_RESET::Register>;

/// Over-temperature Reset Threshold Register (offset 08H) using MMIO.
pub type ResetThreshRegisterMmio = ReadWrite<u32, RESET_THRESH::Register>;
