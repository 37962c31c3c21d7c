use serde::{ Deserialize, Serialize };

/// What a group of connected nodes is being driven by.
///
/// The order matters: classification only ever escalates along it while a
/// group is being collected.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum GroupValue
{
    Nothing,
    High,
    Pullup,
    Pulldown,
    Vcc,
    Vss,
}

impl GroupValue
{
    /// Folds one freshly visited (non-rail) node into the classification.
    ///
    /// This is a staged fall-through on the classification held *before* the
    /// node was seen: a pulldown is only noticed from `Nothing`, a pullup
    /// from `Nothing` or `High`, and a high value from anything up to
    /// `Pullup`. It is not the same as taking the maximum of three checks.
    #[inline]
    pub fn absorb(self, pullup: bool, pulldown: bool, high: bool) -> GroupValue
    {
        let mut value = self;

        if self == GroupValue::Nothing && pulldown
        {
            value = value.max(GroupValue::Pulldown);
        }

        if matches!(self, GroupValue::Nothing | GroupValue::High) && pullup
        {
            value = value.max(GroupValue::Pullup);
        }

        if matches!(self, GroupValue::Nothing | GroupValue::High | GroupValue::Pullup)
            && high
        {
            value = value.max(GroupValue::High);
        }

        value
    }

    /// Logic level the whole group settles to.
    #[inline]
    pub fn level(self) -> bool
    {
        match self
        {
            GroupValue::Vcc | GroupValue::Pullup | GroupValue::High => true,
            GroupValue::Vss | GroupValue::Pulldown | GroupValue::Nothing => false,
        }
    }
}

pub type Node = usize;
pub type Tran = usize;

/// Static transistor definition: `(gate, c1, c2)`.
///
/// Serialises as a three element array, which is the layout netlist
/// datasets use.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Transistor(pub Node, pub Node, pub Node);

impl Transistor
{
    #[inline]
    pub fn gate(&self) -> Node
    {
        self.0
    }

    #[inline]
    pub fn c1(&self) -> Node
    {
        self.1
    }

    #[inline]
    pub fn c2(&self) -> Node
    {
        self.2
    }
}
