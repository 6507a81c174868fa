#![allow(clippy::uninlined_format_args)]

use hex_literal::hex;
use mac_llcrypto as ll;
use rand_core::RngCore;

#[test]
fn test_scratch_lifecycle() {
    use ll::util::scratch::{SCRATCH_CAPACITY, ScratchBuf};

    assert!(ScratchBuf::new(SCRATCH_CAPACITY + 1).is_none());
    let mut buf = ScratchBuf::new(SCRATCH_CAPACITY).unwrap();
    assert_eq!(buf.len(), SCRATCH_CAPACITY);
    assert!(buf.as_slice().iter().all(|b| *b == 0));

    buf.as_mut_slice().copy_from_slice(&[0xa5; SCRATCH_CAPACITY]);
    assert_eq!(buf.prefix(3).unwrap(), &[0xa5; 3]);
    assert!(buf.prefix(SCRATCH_CAPACITY + 1).is_none());
    assert_eq!(format!("{:?}", buf), "ScratchBuf { len: 64, .. }");

    let empty = ScratchBuf::new(0).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.prefix(0).unwrap(), &[] as &[u8]);
}

#[test]
fn test_ct_comparison() {
    use ll::util::ct::{CtByteArray, bytes_eq};

    let a = hex!("0102030405060708");
    let mut b = a;
    assert!(bytes_eq(&a, &b));
    b[7] ^= 0x80;
    assert!(!bytes_eq(&a, &b));
    assert!(!bytes_eq(&a, &a[..7]));

    let ca: CtByteArray<8> = a.into();
    let cb: CtByteArray<8> = b.into();
    assert_ne!(ca, cb);
    assert_eq!(ca, CtByteArray::from(a));
    assert_eq!(<[u8; 8]>::from(ca), a);
}

#[test]
fn test_cautious_rng() {
    let mut rng = ll::rng::CautiousRng;
    let mut x = [0_u8; 32];
    let mut y = [0_u8; 32];
    rng.fill_bytes(&mut x);
    rng.fill_bytes(&mut y);
    assert_ne!(x, [0; 32]);
    assert_ne!(x, y);
}
