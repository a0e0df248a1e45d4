//! ILI9341 power-up register table.

pub(crate) const ILI9341_SWRESET: u8 = 0x01;
pub(crate) const ILI9341_SLPOUT: u8 = 0x11;
pub(crate) const ILI9341_DISPON: u8 = 0x29;
pub(crate) const ILI9341_CASET: u8 = 0x2A;
pub(crate) const ILI9341_PASET: u8 = 0x2B;
pub(crate) const ILI9341_RAMWR: u8 = 0x2C;
pub(crate) const ILI9341_MADCTL: u8 = 0x36;
pub(crate) const ILI9341_PIXFMT: u8 = 0x3A;
pub(crate) const ILI9341_FRMCTR1: u8 = 0xB1;
pub(crate) const ILI9341_DFUNCTR: u8 = 0xB6;
pub(crate) const ILI9341_PWCTR1: u8 = 0xC0;
pub(crate) const ILI9341_PWCTR2: u8 = 0xC1;
pub(crate) const ILI9341_VMCTR1: u8 = 0xC5;
pub(crate) const ILI9341_VMCTR2: u8 = 0xC7;
pub(crate) const ILI9341_PWCTRA: u8 = 0xCB;
pub(crate) const ILI9341_PWCTRB: u8 = 0xCF;
pub(crate) const ILI9341_GMCTRP1: u8 = 0xE0;
pub(crate) const ILI9341_GMCTRN1: u8 = 0xE1;
pub(crate) const ILI9341_DTCA: u8 = 0xE8;
pub(crate) const ILI9341_DTCB: u8 = 0xEA;
pub(crate) const ILI9341_PWONSEQ: u8 = 0xED;
pub(crate) const ILI9341_EN3G: u8 = 0xF2;
pub(crate) const ILI9341_PUMPRC: u8 = 0xF7;

/// MY=1, BGR=1: portrait, rows scanned bottom-up, BGR panel order.
pub(crate) const MADCTL_PORTRAIT_BGR: u8 = 0x88;
/// 16 bits per pixel on both the RGB and MCU interfaces.
pub(crate) const PIXFMT_RGB565: u8 = 0x55;

/// Reset line hold times, in the order high, low, high.
pub(crate) const RESET_PULSE_MS: [u32; 3] = [5, 20, 150];

/// Bring-up stages, in the order the controller sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    HardwareReset,
    SoftwareReset,
    SleepOut,
    PowerCtrlA,
    PowerCtrlB,
    DriverTimingA,
    DriverTimingB,
    PowerOnSeq,
    PumpRatio,
    PowerCtrl1,
    PowerCtrl2,
    VcomCtrl1,
    VcomCtrl2,
    MemoryAccessCtrl,
    PixelFormat,
    FrameRateCtrl,
    DisplayFnCtrl,
    GammaDisable,
    GammaPositive,
    GammaNegative,
    DisplayOn,
}

/// One command with its arguments and the settle time that must pass
/// before the next command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    pub stage: Stage,
    pub command: u8,
    pub payload: &'static [u8],
    pub post_delay_ms: u32,
}

const fn step(stage: Stage, command: u8, payload: &'static [u8]) -> InitStep {
    InitStep {
        stage,
        command,
        payload,
        post_delay_ms: 0,
    }
}

const fn settle(stage: Stage, command: u8, post_delay_ms: u32) -> InitStep {
    InitStep {
        stage,
        command,
        payload: &[],
        post_delay_ms,
    }
}

/// Everything after the hardware reset pulse.
pub const INIT_SEQUENCE: [InitStep; 20] = [
    settle(Stage::SoftwareReset, ILI9341_SWRESET, 150),
    settle(Stage::SleepOut, ILI9341_SLPOUT, 150),
    step(Stage::PowerCtrlA, ILI9341_PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    step(Stage::PowerCtrlB, ILI9341_PWCTRB, &[0x00, 0xC1, 0x30]),
    step(Stage::DriverTimingA, ILI9341_DTCA, &[0x85, 0x00, 0x78]),
    step(Stage::DriverTimingB, ILI9341_DTCB, &[0x00, 0x00]),
    step(Stage::PowerOnSeq, ILI9341_PWONSEQ, &[0x64, 0x03, 0x12, 0x81]),
    step(Stage::PumpRatio, ILI9341_PUMPRC, &[0x20]),
    step(Stage::PowerCtrl1, ILI9341_PWCTR1, &[0x23]), // VRH[5:0]
    step(Stage::PowerCtrl2, ILI9341_PWCTR2, &[0x10]), // SAP[2:0], BT[3:0]
    step(Stage::VcomCtrl1, ILI9341_VMCTR1, &[0x3E, 0x28]),
    step(Stage::VcomCtrl2, ILI9341_VMCTR2, &[0x86]),
    step(Stage::MemoryAccessCtrl, ILI9341_MADCTL, &[MADCTL_PORTRAIT_BGR]),
    step(Stage::PixelFormat, ILI9341_PIXFMT, &[PIXFMT_RGB565]),
    step(Stage::FrameRateCtrl, ILI9341_FRMCTR1, &[0x00, 0x18]), // 70 Hz
    step(Stage::DisplayFnCtrl, ILI9341_DFUNCTR, &[0x08, 0x82, 0x27]),
    step(Stage::GammaDisable, ILI9341_EN3G, &[0x00]),
    step(
        Stage::GammaPositive,
        ILI9341_GMCTRP1,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    step(
        Stage::GammaNegative,
        ILI9341_GMCTRN1,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    settle(Stage::DisplayOn, ILI9341_DISPON, 150),
];
