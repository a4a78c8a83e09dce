//! Legacy transaction wire format for the native transfer.
//!
//! The wallet extension signs, so only two pieces of the format are
//! needed here: the unsigned *message* (the bytes the wallet signs) and
//! the signed envelope submitted to the network.
//!
//! ```text
//! Message:
//!   num_required_sigs     u8
//!   num_readonly_signed   u8
//!   num_readonly_unsigned u8
//!   num_accounts          compact-u16
//!   account_keys          32 bytes * num_accounts
//!   recent_blockhash      32 bytes
//!   num_instructions      compact-u16
//!   instruction:
//!     program_id_index    u8
//!     num_accounts        compact-u16
//!     account_indices     u8 * num_accounts
//!     data_len            compact-u16
//!     data                u8 * data_len
//!
//! Signed envelope:
//!   num_signatures        compact-u16
//!   signatures            64 bytes * num_signatures
//!   message               as above
//! ```

/// The System Program public key: 32 zero bytes
/// (`11111111111111111111111111111111` in Base58).
pub const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

/// System Program `Transfer` instruction index (little-endian u32).
const TRANSFER_IX_INDEX: u32 = 2;

/// Encode a `u16` in the compact-u16 format: 7 value bits per byte,
/// high bit set while more bytes follow.
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = value as u32;
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

/// An unsigned native transfer message, bound to a recent blockhash.
///
/// The sender is the sole signer and fee payer. The blockhash expires a
/// protocol-defined window after it was produced, so the message should
/// be built immediately before the signature is requested.
#[derive(Debug, Clone)]
pub struct TransferMessage {
    pub from: [u8; 32],
    pub to: [u8; 32],
    pub lamports: u64,
    pub recent_blockhash: [u8; 32],
}

impl TransferMessage {
    pub fn new(from: [u8; 32], to: [u8; 32], lamports: u64, recent_blockhash: [u8; 32]) -> Self {
        Self {
            from,
            to,
            lamports,
            recent_blockhash,
        }
    }

    /// Serialize to the exact bytes the wallet signs.
    ///
    /// Account order is canonical: writable signer (sender), writable
    /// non-signer (recipient), read-only non-signer (System Program).
    /// A self-transfer collapses sender and recipient into one entry.
    pub fn serialize(&self) -> Vec<u8> {
        let self_transfer = self.from == self.to;

        let mut account_keys: Vec<&[u8; 32]> = vec![&self.from];
        if !self_transfer {
            account_keys.push(&self.to);
        }
        account_keys.push(&SYSTEM_PROGRAM_ID);

        let to_index = if self_transfer { 0u8 } else { 1u8 };
        let program_id_index = account_keys.len() as u8 - 1;

        let mut data = Vec::with_capacity(12);
        data.extend_from_slice(&TRANSFER_IX_INDEX.to_le_bytes());
        data.extend_from_slice(&self.lamports.to_le_bytes());

        let mut buf = Vec::with_capacity(160);

        // Header: one required signature, no read-only signers, one
        // read-only non-signer (the program).
        buf.push(1);
        buf.push(0);
        buf.push(1);

        buf.extend_from_slice(&encode_compact_u16(account_keys.len() as u16));
        for key in &account_keys {
            buf.extend_from_slice(*key);
        }

        buf.extend_from_slice(&self.recent_blockhash);

        buf.extend_from_slice(&encode_compact_u16(1));
        buf.push(program_id_index);
        buf.extend_from_slice(&encode_compact_u16(2));
        buf.push(0);
        buf.push(to_index);
        buf.extend_from_slice(&encode_compact_u16(data.len() as u16));
        buf.extend_from_slice(&data);

        buf
    }
}

/// Wrap a signed message into the wire envelope the network accepts.
pub fn assemble_signed(message: &[u8], signature: &[u8; 64]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 64 + message.len());
    buf.extend_from_slice(&encode_compact_u16(1));
    buf.extend_from_slice(signature);
    buf.extend_from_slice(message);
    buf
}
