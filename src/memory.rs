/// Host side of the 6502 bus.
///
/// The chip never owns memory. After each rising clock half-cycle the
/// host is asked to either put `read(address)` on the data bus or to
/// `write` what the chip put there.
pub trait Memory
{
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

/// Plain RAM. Addresses past the end of a short slice are a host bug and
/// panic.
impl Memory for [u8]
{
    #[inline]
    fn read(&mut self, addr: u16) -> u8
    {
        self[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, data: u8)
    {
        self[addr as usize] = data;
    }
}

impl Memory for Vec<u8>
{
    #[inline]
    fn read(&mut self, addr: u16) -> u8
    {
        self.as_mut_slice().read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, data: u8)
    {
        self.as_mut_slice().write(addr, data)
    }
}

impl<M: Memory + ?Sized> Memory for &mut M
{
    #[inline]
    fn read(&mut self, addr: u16) -> u8
    {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, data: u8)
    {
        (**self).write(addr, data)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn slices_and_vecs()
    {
        let mut ram = vec![0u8; 0x10000];
        ram.write(0xfffc, 0x34);
        assert_eq!(ram.read(0xfffc), 0x34);

        let slice: &mut [u8] = &mut ram[..];
        slice.write(0xffff, 0x12);
        assert_eq!(slice.read(0xffff), 0x12);
        assert_eq!(ram[0xffff], 0x12);
    }
}
