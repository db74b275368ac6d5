//! Connection masks as plain NetPBM bitmaps (`P1`).

use crate::error::{IoError, Result};
use cellgate_core::connectivity::ConnectivityMap;
use std::path::Path;

/// Renders `map` as a P1 bitmap: `1` for connected cells, row 0 first.
#[must_use]
pub fn to_pbm(map: &ConnectivityMap) -> String {
    let size = map.size();
    let mut out = format!("P1\n{size} {size}\n");
    for row in map.rows() {
        for &connected in row {
            out.push_str(if connected { "1 " } else { "0 " });
        }
        out.push('\n');
    }
    out
}

pub fn write_mask<P: AsRef<Path>>(map: &ConnectivityMap, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_pbm(map)).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing mask to {}", path.display()))
    })?;
    tracing::info!(path = %path.display(), connected = map.count(), "Connection mask saved");
    Ok(())
}

/// Reads the connected flags back from P1 text, row-major.
pub fn parse_pbm(text: &str) -> Result<(usize, Vec<bool>)> {
    let mut tokens = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .flat_map(|(idx, line)| line.split_whitespace().map(move |t| (idx + 1, t)));

    match tokens.next() {
        Some((_, "P1")) => {}
        Some((line, other)) => {
            return Err(IoError::parse(line, format!("expected P1, got {other}")))
        }
        None => return Err(IoError::validation("empty mask")),
    }
    let mut dimension = |name: &str| -> Result<usize> {
        let (line, token) = tokens
            .next()
            .ok_or_else(|| IoError::validation(format!("missing mask {name}")))?;
        token
            .parse()
            .map_err(|_| IoError::parse(line, format!("invalid {name} {token:?}")))
    };
    let width = dimension("width")?;
    let height = dimension("height")?;
    if width != height {
        return Err(IoError::validation(format!(
            "mask must be square, got {width}x{height}"
        )));
    }

    let bits = tokens
        .map(|(line, t)| match t {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(IoError::parse(line, format!("invalid pixel {other:?}"))),
        })
        .collect::<Result<Vec<bool>>>()?;
    if bits.len() != width * height {
        return Err(IoError::validation(format!(
            "expected {} pixels, got {}",
            width * height,
            bits.len()
        )));
    }
    Ok((width, bits))
}
