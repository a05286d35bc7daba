//! Per-SoC description of the TMON block.

use crate::regs::{STATUS_BCM2711, STATUS_BCM7445};

/// Differences between SoC generations carrying the AVS TMON block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TmonSocData {
    /// Device-tree compatible string matching this layout.
    pub compatible: &'static str,
    /// Whether the threshold interrupts may be programmed by the governor.
    pub has_trips: bool,
    pub status_valid_mask: u32,
    pub status_data_mask: u32,
    pub status_data_shift: u32,
}

pub const BCM7445_THERMAL_DATA: TmonSocData = TmonSocData {
    compatible: "brcm,avs-tmon",
    has_trips: true,
    status_valid_mask: STATUS_BCM7445::Valid.mask << STATUS_BCM7445::Valid.shift,
    status_data_mask: STATUS_BCM7445::Data.mask << STATUS_BCM7445::Data.shift,
    status_data_shift: STATUS_BCM7445::Data.shift as u32,
};

/// BCM2711 only reports the temperature; its threshold interrupt is not wired up.
pub const BCM2711_THERMAL_DATA: TmonSocData = TmonSocData {
    compatible: "brcm,avs-tmon-bcm2711",
    has_trips: false,
    status_valid_mask: STATUS_BCM2711::Valid.mask << STATUS_BCM2711::Valid.shift,
    status_data_mask: STATUS_BCM2711::Data.mask << STATUS_BCM2711::Data.shift,
    status_data_shift: STATUS_BCM2711::Data.shift as u32,
};

static TMON_SOC_DATA: [TmonSocData; 2] = [BCM7445_THERMAL_DATA, BCM2711_THERMAL_DATA];

impl TmonSocData {
    /// Look up the layout for a device-tree compatible string.
    pub fn from_compatible(compatible: &str) -> Option<&'static TmonSocData> {
        TMON_SOC_DATA
            .iter()
            .find(|data| data.compatible == compatible)
    }

    /// Returns whether a raw status word holds a completed conversion.
    pub const fn is_valid(&self, status: u32) -> bool {
        status & self.status_valid_mask != 0
    }

    /// Extract the measured code from a raw status word.
    pub const fn data(&self, status: u32) -> u32 {
        (status & self.status_data_mask) >> self.status_data_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::{StatusBcm2711RegisterLocal, StatusBcm7445RegisterLocal};

    #[test]
    fn test_status_layouts() {
        assert_eq!(BCM7445_THERMAL_DATA.status_valid_mask, 1 << 11);
        assert_eq!(BCM7445_THERMAL_DATA.status_data_mask, 0x7FE);
        assert_eq!(BCM7445_THERMAL_DATA.status_data_shift, 1);

        assert_eq!(BCM2711_THERMAL_DATA.status_valid_mask, 1 << 10);
        assert_eq!(BCM2711_THERMAL_DATA.status_data_mask, 0x3FF);
        assert_eq!(BCM2711_THERMAL_DATA.status_data_shift, 0);
    }

    #[test]
    fn test_status_decode_matches_bitfields() {
        let raw = (1 << 11) | (739 << 1);
        let status = StatusBcm7445RegisterLocal::new(raw);
        assert!(BCM7445_THERMAL_DATA.is_valid(raw));
        assert_eq!(
            BCM7445_THERMAL_DATA.data(raw),
            status.read(STATUS_BCM7445::Data)
        );

        let raw = (1 << 10) | 739;
        let status = StatusBcm2711RegisterLocal::new(raw);
        assert!(BCM2711_THERMAL_DATA.is_valid(raw));
        assert_eq!(
            BCM2711_THERMAL_DATA.data(raw),
            status.read(STATUS_BCM2711::Data)
        );
        // The BCM2711 valid flag sits inside the BCM7445 data field.
        assert!(!BCM7445_THERMAL_DATA.is_valid(raw));
    }

    #[test]
    fn test_from_compatible() {
        assert_eq!(
            TmonSocData::from_compatible("brcm,avs-tmon"),
            Some(&BCM7445_THERMAL_DATA)
        );
        assert_eq!(
            TmonSocData::from_compatible("brcm,avs-tmon-bcm2711"),
            Some(&BCM2711_THERMAL_DATA)
        );
        assert_eq!(TmonSocData::from_compatible("brcm,avs-ro-thermal"), None);
    }
}
