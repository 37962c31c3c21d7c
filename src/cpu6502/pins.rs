use super::labels::*;
use crate::types::Node;

/// Named bit groups of the 6502, each an ordered list of nodes with bit 0
/// first.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Pin
{
    AddressBus,
    DataBus,
    Clock,
    Ready,
    Reset,
    Irq,
    Nmi,
    Rw,
    Sync,
    So,
    A,
    X,
    Y,
    S,
    P,
    Pc,
    Pcl,
    Pch,
    Ir,
}

const ADDRESS_BUS: [Node; 16] = [
    ab0, ab1, ab2, ab3, ab4, ab5, ab6, ab7, ab8, ab9, ab10, ab11, ab12, ab13, ab14, ab15,
];
const DATA_BUS: [Node; 8] = [db0, db1, db2, db3, db4, db5, db6, db7];
const REG_A: [Node; 8] = [a0, a1, a2, a3, a4, a5, a6, a7];
const REG_X: [Node; 8] = [x0, x1, x2, x3, x4, x5, x6, x7];
const REG_Y: [Node; 8] = [y0, y1, y2, y3, y4, y5, y6, y7];
const REG_S: [Node; 8] = [s0, s1, s2, s3, s4, s5, s6, s7];
const REG_P: [Node; 8] = [p0, p1, p2, p3, p4, p5, p6, p7];
const REG_PC: [Node; 16] = [
    pcl0, pcl1, pcl2, pcl3, pcl4, pcl5, pcl6, pcl7, pch0, pch1, pch2, pch3, pch4, pch5, pch6, pch7,
];
const REG_PCL: [Node; 8] = [pcl0, pcl1, pcl2, pcl3, pcl4, pcl5, pcl6, pcl7];
const REG_PCH: [Node; 8] = [pch0, pch1, pch2, pch3, pch4, pch5, pch6, pch7];
// the chip keeps the instruction register inverted
const REG_NOTIR: [Node; 8] = [notir0, notir1, notir2, notir3, notir4, notir5, notir6, notir7];

impl Pin
{
    pub const ALL: [Pin; 19] = [
        Pin::AddressBus,
        Pin::DataBus,
        Pin::Clock,
        Pin::Ready,
        Pin::Reset,
        Pin::Irq,
        Pin::Nmi,
        Pin::Rw,
        Pin::Sync,
        Pin::So,
        Pin::A,
        Pin::X,
        Pin::Y,
        Pin::S,
        Pin::P,
        Pin::Pc,
        Pin::Pcl,
        Pin::Pch,
        Pin::Ir,
    ];

    pub fn nodes(self) -> &'static [Node]
    {
        match self
        {
            Pin::AddressBus => &ADDRESS_BUS,
            Pin::DataBus => &DATA_BUS,
            Pin::Clock => &[clk0],
            Pin::Ready => &[rdy],
            Pin::Reset => &[res],
            Pin::Irq => &[irq],
            Pin::Nmi => &[nmi],
            Pin::Rw => &[rw],
            Pin::Sync => &[sync_],
            Pin::So => &[so],
            Pin::A => &REG_A,
            Pin::X => &REG_X,
            Pin::Y => &REG_Y,
            Pin::S => &REG_S,
            Pin::P => &REG_P,
            Pin::Pc => &REG_PC,
            Pin::Pcl => &REG_PCL,
            Pin::Pch => &REG_PCH,
            Pin::Ir => &REG_NOTIR,
        }
    }

    /// Bits stored complemented on the chip, flipped on read and on write.
    pub fn inversion(self) -> u16
    {
        match self
        {
            Pin::Ir => 0xff,
            _ => 0,
        }
    }

    #[inline]
    pub fn width(self) -> usize
    {
        self.nodes().len()
    }

    #[inline]
    pub fn mask(self) -> u16
    {
        (((1u32 << self.width()) - 1) & 0xffff) as u16
    }
}
