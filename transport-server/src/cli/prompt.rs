//! Line prompts.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Print `prompt` and read one line, trimmed. End of input reads as empty.
pub async fn read_answer<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_trimmed_line() {
        let mut input: &[u8] = b"  MG Road \nSilk Board\n";
        let mut out = Vec::new();

        let first = read_answer(&mut input, &mut out, "From: ").await.unwrap();
        let second = read_answer(&mut input, &mut out, "To: ").await.unwrap();

        assert_eq!(first, "MG Road");
        assert_eq!(second, "Silk Board");
        assert_eq!(String::from_utf8(out).unwrap(), "From: To: ");
    }

    #[tokio::test]
    async fn eof_is_empty() {
        let mut input: &[u8] = b"";
        let mut out = Vec::new();
        assert_eq!(read_answer(&mut input, &mut out, "? ").await.unwrap(), "");
    }
}
