use anyhow::Result;
use shashasha::{Hasher, SHA3_384_BYTES, Sha3_384, b2h};

#[test]
fn sha384_with_update() -> Result<()> {
    let mut hasher = Sha3_384::new();
    let mut result = [0u8; SHA3_384_BYTES];
    hasher.update(b"Hello, world!")?;
    hasher.finalize(&mut result)?;
    assert_eq!(result.len(), SHA3_384_BYTES);
    assert_eq!(
        "6ba9ea268965916f5937228dde678c202f9fe756a87d8b1b7362869583a45901fd1a27289d72fc0e3ff48b1b78827d3a",
        b2h(&result)
    );
    Ok(())
}

#[test]
fn sha384_streaming_matches_one_shot() -> Result<()> {
    let mut streamed = Sha3_384::default();
    streamed.update(b"Hello, ")?;
    streamed.update(b"world!")?;
    let mut streamed_out = [0u8; SHA3_384_BYTES];
    streamed.finalize(&mut streamed_out)?;

    let mut one_shot = Sha3_384::new();
    one_shot.update(b"Hello, world!")?;
    let mut one_shot_out = [0u8; SHA3_384_BYTES];
    one_shot.finalize(&mut one_shot_out)?;

    assert_eq!(streamed_out, one_shot_out);
    Ok(())
}
