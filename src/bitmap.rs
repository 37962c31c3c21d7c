use crate::types::Node;

const WORD_BITS: usize = 64;

/// Fixed-size bitset, one bit per node or transistor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap
{
    data: Vec<u64>,
    size: usize,
}

impl Bitmap
{
    pub fn new(size: usize) -> Bitmap
    {
        let words = (size + WORD_BITS - 1) / WORD_BITS;
        Bitmap {
            data: vec![0u64; words],
            size,
        }
    }

    pub fn from_bools(bits: &[bool]) -> Bitmap
    {
        let mut bitmap = Bitmap::new(bits.len());
        for (index, bit) in bits.iter().enumerate()
        {
            bitmap.set(index, *bit);
        }
        bitmap
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.size
    }

    pub fn clear(&mut self)
    {
        self.data.iter_mut().for_each(|word| *word = 0);
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool
    {
        debug_assert!(index < self.size, "bit {} out of range {}", index, self.size);
        self.data[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: bool)
    {
        debug_assert!(index < self.size, "bit {} out of range {}", index, self.size);
        let mask = 1u64 << (index % WORD_BITS);
        if value
        {
            self.data[index / WORD_BITS] |= mask;
        }
        else
        {
            self.data[index / WORD_BITS] &= !mask;
        }
    }

    pub fn count_ones(&self) -> usize
    {
        self.data.iter().map(|word| word.count_ones() as usize).sum()
    }
}

/// Unique set of nodes that remembers insertion order.
///
/// Capacity is the node count, so inserts never reallocate once the set
/// has been created. Clearing only touches the marks of stored nodes.
#[derive(Debug, Clone)]
pub struct NodeSet
{
    marks: Bitmap,
    items: Vec<Node>,
}

impl NodeSet
{
    pub fn new(capacity: usize) -> NodeSet
    {
        NodeSet {
            marks: Bitmap::new(capacity),
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns `false` if the node was already present.
    #[inline]
    pub fn insert(&mut self, node: Node) -> bool
    {
        if self.marks.get(node)
        {
            return false;
        }
        self.marks.set(node, true);
        self.items.push(node);
        true
    }

    #[inline]
    pub fn contains(&self, node: Node) -> bool
    {
        self.marks.get(node)
    }

    #[inline]
    pub fn clear(&mut self)
    {
        for node in self.items.drain(..)
        {
            self.marks.set(node, false);
        }
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node]
    {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Node>
    {
        self.items.iter()
    }
}
