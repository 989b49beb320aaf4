//! TurboSHAKE256 against the published Keccak-team test vectors.

use turboshake::{create_turbo_shake256, turboshake256_hex};

#[test]
fn empty_message_64_bytes() {
    assert_eq!(
        turboshake256_hex(b"", 0x1F, 64),
        "367A329DAFEA871C7802EC67F905AE13C57695DC2C6663C61035F59A18F8E7D\
         B11EDC0E12E91EA60EB6B32DF06DD7F002FBAFABB6E13EC1CC20D995547600DB0"
    );
}

#[test]
fn single_ff_byte_separation_06() {
    assert_eq!(
        turboshake256_hex(&[0xFF], 0x06, 64),
        "738D7B4E37D18B7F22AD1B5313E357E3DD7D07056A26A303C433FA353345528\
         0F4F5A7D4F700EFB437FE6D281405E07BE32A0A972E22E63ADC1B090DAEFE004B"
    );
}

#[test]
fn incremental_matches_published_vector() {
    let mut ctx = create_turbo_shake256(0x1F);
    ctx.update(b"").unwrap();
    let out = ctx.squeeze_hex(64);
    assert_eq!(
        out,
        "367A329DAFEA871C7802EC67F905AE13C57695DC2C6663C61035F59A18F8E7D\
         B11EDC0E12E91EA60EB6B32DF06DD7F002FBAFABB6E13EC1CC20D995547600DB0"
    );
}

#[test]
fn two_variants_with_same_input_differ() {
    use turboshake::turboshake128_hex;
    let a = turboshake128_hex(b"shared", 0x1F, 32);
    let b = turboshake256_hex(b"shared", 0x1F, 32);
    assert_ne!(a, b);
}
