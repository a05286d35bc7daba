/// Offsets of the AVS TMON registers, relative to the mapped base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmonRegOffset {
    /// Status register 0x00.
    Status,
    /// Over-temperature reset enable register 0x04.
    EnOvertempReset,
    /// Over-temperature reset threshold register 0x08.
    ResetThresh,
    /// Interrupt idle time register 0x10.
    IntIdleTime,
    /// Temperature interrupt source enable register 0x14.
    EnTempIntSrcs,
    /// Temperature interrupt threshold register 0x18.
    IntThresh,
    /// Code that triggered the last temperature interrupt 0x1C.
    TempIntCode,
    /// Test point enable register 0x20.
    TpTestEnable,
}

impl TmonRegOffset {
    pub const fn from_offset(value: usize) -> Option<Self> {
        match value {
            0x00 => Some(TmonRegOffset::Status),
            0x04 => Some(TmonRegOffset::EnOvertempReset),
            0x08 => Some(TmonRegOffset::ResetThresh),
            0x10 => Some(TmonRegOffset::IntIdleTime),
            0x14 => Some(TmonRegOffset::EnTempIntSrcs),
            0x18 => Some(TmonRegOffset::IntThresh),
            0x1C => Some(TmonRegOffset::TempIntCode),
            0x20 => Some(TmonRegOffset::TpTestEnable),
            _ => None,
        }
    }

    pub const fn offset(&self) -> usize {
        match self {
            TmonRegOffset::Status => 0x00,
            TmonRegOffset::EnOvertempReset => 0x04,
            TmonRegOffset::ResetThresh => 0x08,
            TmonRegOffset::IntIdleTime => 0x10,
            TmonRegOffset::EnTempIntSrcs => 0x14,
            TmonRegOffset::IntThresh => 0x18,
            TmonRegOffset::TempIntCode => 0x1C,
            TmonRegOffset::TpTestEnable => 0x20,
        }
    }

    /// Returns whether software writes to this register have any effect.
    pub const fn is_read_only(&self) -> bool {
        matches!(self, TmonRegOffset::Status | TmonRegOffset::TempIntCode)
    }
}

impl core::fmt::Display for TmonRegOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TmonRegOffset::Status => write!(f, "STATUS"),
            TmonRegOffset::EnOvertempReset => write!(f, "EN_OVERTEMP_RESET"),
            TmonRegOffset::ResetThresh => write!(f, "RESET_THRESH"),
            TmonRegOffset::IntIdleTime => write!(f, "INT_IDLE_TIME"),
            TmonRegOffset::EnTempIntSrcs => write!(f, "EN_TEMP_INT_SRCS"),
            TmonRegOffset::IntThresh => write!(f, "INT_THRESH"),
            TmonRegOffset::TempIntCode => write!(f, "TEMP_INT_CODE"),
            TmonRegOffset::TpTestEnable => write!(f, "TP_TEST_ENABLE"),
        }
    }
}

/// Size of the register window decoded by the TMON block.
pub const TMON_MMIO_SIZE: usize = 0x24;

/// Default slope of the code to temperature conversion, in millidegrees per code.
pub const AVS_TMON_TEMP_SLOPE: i32 = 487;
/// Temperature reported for code 0, in millidegree Celsius.
pub const AVS_TMON_TEMP_OFFSET: i32 = 410040;

/// Largest (coldest) code the sensor produces.
pub const AVS_TMON_TEMP_MAX: u32 = 0x3ff;
/// Temperature of [`AVS_TMON_TEMP_MAX`], in millidegree Celsius.
pub const AVS_TMON_TEMP_MIN: i32 = -88161;
pub const AVS_TMON_TEMP_MASK: u32 = AVS_TMON_TEMP_MAX;
