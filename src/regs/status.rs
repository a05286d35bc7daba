//! TMON Status Register (offset 00H).
//! Holds the most recent conversion result together with a valid flag. The
//! position of both fields differs between SoC generations.

use tock_registers::LocalRegisterCopy;
use tock_registers::register_bitfields;

register_bitfields! {
    u32,
    /// Status layout of BCM7445 and the other STB chips.
    pub STATUS_BCM7445 [
        /// Set once the sensor has completed a conversion.
        Valid OFFSET(11) NUMBITS(1) [],
        /// Measured code, bits 1 through 10.
        Data OFFSET(1) NUMBITS(10) [],
    ],
    /// Status layout of BCM2711.
    pub STATUS_BCM2711 [
        /// Set once the sensor has completed a conversion.
        Valid OFFSET(10) NUMBITS(1) [],
        /// Measured code, bits 0 through 9.
        Data OFFSET(0) NUMBITS(10) [],
    ]
}

#[allow(dead_code)]
pub type StatusBcm7445RegisterLocal = LocalRegisterCopy<u32, STATUS_BCM7445::Register>;
#[allow(dead_code)]
pub type StatusBcm2711RegisterLocal = LocalRegisterCopy<u32, STATUS_BCM2711::Register>;
