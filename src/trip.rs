//! Trip points of the TMON block.

use crate::consts::TmonRegOffset;
use crate::regs::{EN_OVERTEMP_RESET, EN_TEMP_INT_SRCS, INT_THRESH, RESET_THRESH};

/// Kinds of temperature trip the hardware can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum TripKind {
    /// Trips when the temperature falls to the threshold.
    Low = 0,
    /// Trips when the temperature rises to the threshold.
    High = 1,
    /// Resets the chip when the temperature rises to the threshold.
    Reset = 2,
}

impl TripKind {
    pub const ALL: [TripKind; 3] = [TripKind::Low, TripKind::High, TripKind::Reset];

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    pub fn descriptor(&self) -> &'static TripDescriptor {
        &TMON_TRIPS[self.as_usize()]
    }
}

impl core::fmt::Display for TripKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TripKind::Low => write!(f, "low"),
            TripKind::High => write!(f, "high"),
            TripKind::Reset => write!(f, "reset"),
        }
    }
}

/// Where a trip lives in the register space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDescriptor {
    /// Register holding the bit that arms the trip.
    pub enable_offs: TmonRegOffset,
    pub enable_mask: u32,
    /// Register holding the threshold code.
    pub reg_offs: TmonRegOffset,
    /// Threshold field mask, in register position.
    pub reg_mask: u32,
    pub reg_shift: u32,
}

/// Trip descriptors, indexed by [`TripKind`].
pub static TMON_TRIPS: [TripDescriptor; 3] = [
    TripDescriptor {
        enable_offs: TmonRegOffset::EnTempIntSrcs,
        enable_mask: EN_TEMP_INT_SRCS::Low.mask << EN_TEMP_INT_SRCS::Low.shift,
        reg_offs: TmonRegOffset::IntThresh,
        reg_mask: INT_THRESH::Low.mask << INT_THRESH::Low.shift,
        reg_shift: INT_THRESH::Low.shift as u32,
    },
    TripDescriptor {
        enable_offs: TmonRegOffset::EnTempIntSrcs,
        enable_mask: EN_TEMP_INT_SRCS::High.mask << EN_TEMP_INT_SRCS::High.shift,
        reg_offs: TmonRegOffset::IntThresh,
        reg_mask: INT_THRESH::High.mask << INT_THRESH::High.shift,
        reg_shift: INT_THRESH::High.shift as u32,
    },
    TripDescriptor {
        enable_offs: TmonRegOffset::EnOvertempReset,
        enable_mask: EN_OVERTEMP_RESET::Enable.mask << EN_OVERTEMP_RESET::Enable.shift,
        reg_offs: TmonRegOffset::ResetThresh,
        reg_mask: RESET_THRESH::Thresh.mask << RESET_THRESH::Thresh.shift,
        reg_shift: RESET_THRESH::Thresh.shift as u32,
    },
];

impl TripDescriptor {
    /// Place `code` into the threshold field, dropping bits that do not fit.
    pub const fn encode(&self, code: u32) -> u32 {
        (code << self.reg_shift) & self.reg_mask
    }

    /// Extract the threshold code from a raw register value.
    pub const fn decode(&self, value: u32) -> u32 {
        (value & self.reg_mask) >> self.reg_shift
    }
}
