pub mod int;
pub mod reset;
pub mod status;

pub use int::*;
pub use reset::*;
pub use status::*;

use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, ReadWrite};

register_structs! {
    #[allow(non_snake_case)]
    pub TmonRegs {
        /// Status register: valid flag and the latest measured code, layout is per SoC.
        (0x00 => pub STATUS: ReadOnly<u32>),
        /// Over-temperature reset enable register.
        (0x04 => pub EN_OVERTEMP_RESET: OvertempResetRegisterMmio),
        /// Over-temperature reset threshold register.
        (0x08 => pub RESET_THRESH: ResetThreshRegisterMmio),
        (0x0C => _reserved0),
        /// Interrupt idle time register.
        (0x10 => pub INT_IDLE_TIME: ReadWrite<u32>),
        /// Temperature interrupt source enable register.
        (0x14 => pub EN_TEMP_INT_SRCS: TempIntSrcsRegisterMmio),
        /// Temperature interrupt threshold register, holds both low and high codes.
        (0x18 => pub INT_THRESH: IntThreshRegisterMmio),
        /// Code latched when the last temperature interrupt fired.
        (0x1C => pub TEMP_INT_CODE: TempIntCodeRegisterMmio),
        /// Test point enable register.
        (0x20 => pub TP_TEST_ENABLE: ReadWrite<u32>),
        (0x24 => @END),
    }
}
