use crate::hash::keccak;
use ethereum_types::{Address, H256, U256};
use rlp::RlpStream;

/// Specifies how an address is calculated for a new contract.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CreateContractAddress {
    /// Address is calculated from sender and nonce. pWASM `create` scheme.
    FromSenderAndNonce,
    /// Address is calculated from sender, salt and code hash. pWASM `create2` scheme and EIP-1014 CREATE2 scheme.
    FromSenderSaltAndCodeHash(H256),
    /// Address is calculated from code hash and sender. Used by pwasm create ext.
    FromSenderAndCodeHash,
}

/// Returns new address created from address, nonce, and code hash
pub fn contract_address(
    address_scheme: CreateContractAddress,
    sender: &Address,
    nonce: &U256,
    code: &[u8],
) -> (Address, Option<H256>) {

    match address_scheme {
        CreateContractAddress::FromSenderAndNonce => {
            let mut stream = RlpStream::new_list(2);
            stream.append(sender);
            stream.append(nonce);
            (From::from(keccak(stream.as_raw())), None)
        }
        CreateContractAddress::FromSenderSaltAndCodeHash(salt) => {
            let code_hash = keccak(code);
            let mut buffer = [0u8; 1 + 20 + 32 + 32];
            buffer[0] = 0xff;
            &mut buffer[1..(1 + 20)].copy_from_slice(&sender[..]);
            &mut buffer[(1 + 20)..(1 + 20 + 32)].copy_from_slice(&salt[..]);
            &mut buffer[(1 + 20 + 32)..].copy_from_slice(&code_hash[..]);
            (From::from(keccak(&buffer[..])), Some(code_hash))
        }
        CreateContractAddress::FromSenderAndCodeHash => {
            let code_hash = keccak(code);
            let mut buffer = [0u8; 20 + 32];
            &mut buffer[..20].copy_from_slice(&sender[..]);
            &mut buffer[20..].copy_from_slice(&code_hash[..]);
            (From::from(keccak(&buffer[..])), Some(code_hash))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hex::FromHex;

    fn address_from_hex(hex: &str) -> Address {
        let bytes: Vec<u8> = hex.from_hex().unwrap();
        Address::from_slice(&bytes)
    }

    #[test]
    fn from_sender_and_nonce_matches_known_vector() {
        let sender = address_from_hex("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");
        let expected = address_from_hex("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d");

        let (address, code_hash) = contract_address(
            CreateContractAddress::FromSenderAndNonce,
            &sender,
            &U256::zero(),
            &[],
        );

        assert_eq!(address, expected);
        assert!(code_hash.is_none());
    }

    #[test]
    fn different_nonces_derive_different_addresses() {
        let sender = address_from_hex("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        let (at_zero, _) = contract_address(
            CreateContractAddress::FromSenderAndNonce,
            &sender,
            &U256::zero(),
            &[],
        );
        let (at_one, _) = contract_address(
            CreateContractAddress::FromSenderAndNonce,
            &sender,
            &U256::one(),
            &[],
        );

        assert_ne!(at_zero, at_one);
    }

    #[test]
    fn from_sender_salt_and_code_hash_returns_the_code_hash() {
        let sender = address_from_hex("0000000000000000000000000000000000000000");
        let salt = H256::zero();

        let (_, code_hash) = contract_address(
            CreateContractAddress::FromSenderSaltAndCodeHash(salt),
            &sender,
            &U256::zero(),
            &[0x60, 0x00],
        );

        assert_eq!(code_hash, Some(keccak(&[0x60, 0x00][..])));
    }
}
