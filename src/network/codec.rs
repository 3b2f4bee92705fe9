//! Binary parameter files.
//!
//! # Layout (big-endian, no padding)
//! ```text
//! i32        n, the number of layer sizes
//! i32 x n    layer sizes, input first
//! f64 ...    weights: layer, then row (output neuron), then column
//! f64 ...    biases:  layer, then neuron
//! ```
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::{validate_sizes, Network};

/// Upper bound on entries reserved ahead of reading them.
const PREALLOC_LIMIT: usize = 4096;

impl Network {
    /// Writes the layer sizes and every parameter to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let n = i32::try_from(self.layer_count()).map_err(|_| {
            NetError::Format(format!("{} layers do not fit in an i32", self.layer_count()))
        })?;
        writer.write_all(&n.to_be_bytes())?;

        for &size in self.sizes() {
            let size = i32::try_from(size).map_err(|_| {
                NetError::Format(format!("layer size {} does not fit in an i32", size))
            })?;
            writer.write_all(&size.to_be_bytes())?;
        }

        for w in self.weights() {
            for row in &w.data {
                for x in row {
                    writer.write_all(&x.to_be_bytes())?;
                }
            }
        }

        for b in self.biases() {
            for x in b {
                writer.write_all(&x.to_be_bytes())?;
            }
        }

        Ok(())
    }

    /// Reads a network written by [`Network::write_to`].
    ///
    /// Negative counts are `Format` errors, as are layouts no network can
    /// have (fewer than two layers, an empty layer). A truncated stream
    /// surfaces as the underlying `Io` error.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Network> {
        let n = read_i32(reader)?;
        if n < 0 {
            return Err(NetError::Format(format!("negative layer count {}", n)));
        }

        let mut sizes = Vec::with_capacity((n as usize).min(PREALLOC_LIMIT));
        for i in 0..n {
            let size = read_i32(reader)?;
            if size < 0 {
                return Err(NetError::Format(format!("layer {} has negative size {}", i, size)));
            }
            sizes.push(size as usize);
        }

        validate_sizes(&sizes).map_err(|e| NetError::Format(e.to_string()))?;

        // Reservations are capped: a header declaring huge layers fails with
        // `UnexpectedEof` once the data runs out.
        let mut weights = Vec::with_capacity(sizes.len() - 1);
        for pair in sizes.windows(2) {
            let (cols, rows) = (pair[0], pair[1]);
            let mut data = Vec::with_capacity(rows.min(PREALLOC_LIMIT));
            for _ in 0..rows {
                let mut row = Vec::with_capacity(cols.min(PREALLOC_LIMIT));
                for _ in 0..cols {
                    row.push(read_f64(reader)?);
                }
                data.push(row);
            }
            weights.push(Matrix { rows, cols, data });
        }

        let mut biases = Vec::with_capacity(sizes.len() - 1);
        for &len in &sizes[1..] {
            let mut b = Vec::with_capacity(len.min(PREALLOC_LIMIT));
            for _ in 0..len {
                b.push(read_f64(reader)?);
            }
            biases.push(b);
        }

        Network::from_parameters(sizes, weights, biases)
    }

    /// Saves the network to `path`, replacing any existing file. A failed
    /// write may leave a partial file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.display(), sizes = ?self.sizes(), "saved network parameters");
        Ok(())
    }

    /// Loads a network saved by [`Network::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let net = Network::read_from(&mut reader)?;
        debug!(path = %path.display(), sizes = ?net.sizes(), "loaded network parameters");
        Ok(net)
    }
}

fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut buf4 = [0u8; 4];
    reader.read_exact(&mut buf4)?;
    Ok(i32::from_be_bytes(buf4))
}

fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    let mut buf8 = [0u8; 8];
    reader.read_exact(&mut buf8)?;
    Ok(f64::from_be_bytes(buf8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_net() -> Network {
        Network::from_parameters(
            vec![2, 1],
            vec![Matrix::from_rows(vec![vec![1.5, -2.0]]).unwrap()],
            vec![vec![0.25]],
        ).unwrap()
    }

    #[test]
    fn writes_exact_byte_layout() {
        let mut bytes: Vec<u8> = Vec::new();
        small_net().write_to(&mut bytes).unwrap();

        let mut expected: Vec<u8> = Vec::new();
        expected.extend_from_slice(&[0, 0, 0, 2]);
        expected.extend_from_slice(&[0, 0, 0, 2]);
        expected.extend_from_slice(&[0, 0, 0, 1]);
        expected.extend_from_slice(&1.5f64.to_be_bytes());
        expected.extend_from_slice(&(-2.0f64).to_be_bytes());
        expected.extend_from_slice(&0.25f64.to_be_bytes());
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), 4 + 2 * 4 + 3 * 8);
    }

    #[test]
    fn reads_back_what_it_wrote() {
        let mut bytes: Vec<u8> = Vec::new();
        small_net().write_to(&mut bytes).unwrap();
        let net = Network::read_from(&mut bytes.as_slice()).unwrap();
        assert_eq!(net, small_net());
    }

    #[test]
    fn negative_layer_count_is_a_format_error() {
        let bytes = (-1i32).to_be_bytes();
        assert!(matches!(Network::read_from(&mut &bytes[..]), Err(NetError::Format(_))));
    }

    #[test]
    fn negative_layer_size_is_a_format_error() {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&2i32.to_be_bytes());
        bytes.extend_from_slice(&3i32.to_be_bytes());
        bytes.extend_from_slice(&(-4i32).to_be_bytes());
        assert!(matches!(Network::read_from(&mut bytes.as_slice()), Err(NetError::Format(_))));
    }

    #[test]
    fn unbuildable_layout_is_a_format_error() {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&1i32.to_be_bytes());
        bytes.extend_from_slice(&3i32.to_be_bytes());
        assert!(matches!(Network::read_from(&mut bytes.as_slice()), Err(NetError::Format(_))));

        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&2i32.to_be_bytes());
        bytes.extend_from_slice(&0i32.to_be_bytes());
        bytes.extend_from_slice(&1i32.to_be_bytes());
        assert!(matches!(Network::read_from(&mut bytes.as_slice()), Err(NetError::Format(_))));
    }

    #[test]
    fn truncated_stream_is_an_io_error() {
        let mut bytes: Vec<u8> = Vec::new();
        small_net().write_to(&mut bytes).unwrap();
        bytes.truncate(bytes.len() - 3);
        match Network::read_from(&mut bytes.as_slice()) {
            Err(NetError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected an io error, got {:?}", other),
        }

        let header_only = 2i32.to_be_bytes();
        assert!(matches!(Network::read_from(&mut &header_only[..]), Err(NetError::Io(_))));
    }

    #[test]
    fn huge_declared_layers_fail_on_missing_data() {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&2i32.to_be_bytes());
        bytes.extend_from_slice(&i32::MAX.to_be_bytes());
        bytes.extend_from_slice(&i32::MAX.to_be_bytes());
        match Network::read_from(&mut bytes.as_slice()) {
            Err(NetError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
