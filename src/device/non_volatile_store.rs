//! Secure-element storage block kept across power cycles, implemented by calling code.

/// Size of the secure-element NVM block.
pub const SE_NVM_BLOCK_SIZE: usize = 16;

/// Byte offset of the frame sequence counter inside the block.
pub const SE_NVM_SEQNUM: usize = 0;

/// The sequence counter is 12 bits wide; the upper nibble is reserved.
pub const SEQNUM_MASK: u16 = 0x0FFF;

/// Raw secure-element block as persisted by the storage layer.
pub type NvmBlock = [u8; SE_NVM_BLOCK_SIZE];

/// Read access to the persisted secure-element block.
///
/// The protocol stack owns writes; this crate only reads. The read is synchronous and storage failures are
/// handled below this layer.
pub trait NonVolatileStore {
    /// Read the whole block.
    fn read_block(&mut self) -> NvmBlock;
}

/// Decode the frame sequence counter from a raw block.
pub fn sequence_id(block: &NvmBlock) -> u16 {
    u16::from_le_bytes([block[SE_NVM_SEQNUM], block[SE_NVM_SEQNUM + 1]]) & SEQNUM_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_with(lo: u8, hi: u8) -> NvmBlock {
        let mut block = [0xA5; SE_NVM_BLOCK_SIZE];
        block[SE_NVM_SEQNUM] = lo;
        block[SE_NVM_SEQNUM + 1] = hi;
        block
    }

    #[test]
    fn counter_is_little_endian_and_masked() {
        assert_eq!(sequence_id(&block_with(0x34, 0x12)), 0x234);
    }

    #[test]
    fn reserved_nibble_is_ignored() {
        assert_eq!(sequence_id(&block_with(0xFF, 0xFF)), 0x0FFF);
        assert_eq!(sequence_id(&block_with(0x00, 0xF0)), 0);
    }

    #[test]
    fn neighbouring_bytes_do_not_leak_in() {
        assert_eq!(sequence_id(&block_with(0x01, 0x00)), 1);
    }
}
