use anyhow::Result;
use shashasha::{Hasher, SHA1_BYTES, Sha1, b2h, sha1_swap_endian};

#[test]
fn sha1_empty_string() -> Result<()> {
    let mut hasher = Sha1::new();
    let mut result = [0u8; SHA1_BYTES];
    hasher.finalize(&mut result)?;
    assert_eq!("da39a3ee5e6b4b0d3255bfef95601890afd80709", b2h(&result));
    Ok(())
}

#[test]
fn sha1_streaming_matches_one_shot() -> Result<()> {
    let mut streamed = Sha1::new();
    streamed.update(b"the quick brown fox ")?;
    streamed.update(b"jumps over the lazy dog")?;
    let mut streamed_out = [0u8; SHA1_BYTES];
    streamed.finalize(&mut streamed_out)?;

    let mut one_shot = Sha1::default();
    one_shot.update(b"the quick brown fox jumps over the lazy dog")?;
    let mut one_shot_out = [0u8; SHA1_BYTES];
    one_shot.finalize(&mut one_shot_out)?;

    assert_eq!(streamed_out, one_shot_out);
    Ok(())
}

#[test]
fn sha1_swap_endian_round_trips() -> Result<()> {
    let mut hasher = Sha1::new();
    hasher.update(b"abc")?;
    let mut digest = [0u8; SHA1_BYTES];
    hasher.finalize(&mut digest)?;

    let original = digest;
    sha1_swap_endian(&mut digest);
    assert_ne!(original, digest);
    sha1_swap_endian(&mut digest);
    assert_eq!(original, digest);
    Ok(())
}
