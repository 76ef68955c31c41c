use anyhow::Result;
use shashasha::{Hasher, SHA3_512_BYTES, Sha3_512, b2h};

#[test]
fn sha512_empty_string() -> Result<()> {
    let mut hasher = Sha3_512::new();
    let mut result = [0u8; SHA3_512_BYTES];
    hasher.finalize(&mut result)?;
    assert_eq!(
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
        b2h(&result)
    );
    Ok(())
}

#[test]
fn sha512_with_update() -> Result<()> {
    let mut hasher = Sha3_512::new();
    let mut result = [0u8; SHA3_512_BYTES];
    hasher.update(b"Hello, world!")?;
    hasher.finalize(&mut result)?;
    assert_eq!(result.len(), SHA3_512_BYTES);
    assert_eq!(
        "8e47f1185ffd014d238fabd02a1a32defe698cbf38c037a90e3c0a0a32370fb52cbd641250508502295fcabcbf676c09470b27443868c8e5f70e26dc337288af",
        b2h(&result)
    );
    Ok(())
}

#[test]
fn sha512_streaming_matches_one_shot() -> Result<()> {
    let mut streamed = Sha3_512::default();
    streamed.update(b"Hello, ")?;
    streamed.update(b"world!")?;
    let mut streamed_out = [0u8; SHA3_512_BYTES];
    streamed.finalize(&mut streamed_out)?;

    let mut one_shot = Sha3_512::new();
    one_shot.update(b"Hello, world!")?;
    let mut one_shot_out = [0u8; SHA3_512_BYTES];
    one_shot.finalize(&mut one_shot_out)?;

    assert_eq!(streamed_out, one_shot_out);
    Ok(())
}
