use anyhow::Result;
use shashasha::{Shake256, XofHasher, b2h};

#[test]
fn shake256_empty_string_first_32_bytes() -> Result<()> {
    let mut hasher = Shake256::new();
    hasher.finish()?;
    let mut result = [0u8; 32];
    hasher.squeeze(&mut result)?;
    assert_eq!(
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762",
        b2h(&result)
    );
    Ok(())
}

#[test]
fn shake256_streaming_matches_one_shot() -> Result<()> {
    let mut streamed = Shake256::new();
    streamed.update(b"Hello, ")?;
    streamed.update(b"world!")?;
    streamed.finish()?;
    let mut streamed_out = [0u8; 48];
    streamed.squeeze(&mut streamed_out)?;

    let mut one_shot = Shake256::new();
    one_shot.update(b"Hello, world!")?;
    one_shot.finish()?;
    let mut one_shot_out = [0u8; 48];
    one_shot.squeeze(&mut one_shot_out)?;

    assert_eq!(streamed_out, one_shot_out);
    Ok(())
}

#[test]
fn shake256_rate_boundary_squeeze_lengths() -> Result<()> {
    // SHAKE256's rate is 136 bytes; exercise r-1, r, r+1 and a multi-permutation length.
    for len in [0usize, 1, 135, 136, 137, 2 * 136 + 3] {
        let mut hasher = Shake256::new();
        hasher.update(b"boundary")?;
        hasher.finish()?;
        let mut out = vec![0u8; len];
        hasher.squeeze(&mut out)?;
        assert_eq!(len, out.len());
    }
    Ok(())
}
