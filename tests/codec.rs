use neuralnet::{NetError, Network};
use rand::{rngs::StdRng, SeedableRng};

fn random_net(sizes: &[usize], seed: u64) -> Network {
    let mut net = Network::new(sizes).unwrap();
    net.randomize(&mut StdRng::seed_from_u64(seed));
    net
}

#[test]
fn file_round_trip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("net.bin");

    for (sizes, seed) in [(vec![2, 3, 2], 1), (vec![5, 1], 2), (vec![4, 8, 6, 3], 3)] {
        let net = random_net(&sizes, seed);
        net.save(&path).unwrap();
        let loaded = Network::load(&path).unwrap();
        assert_eq!(loaded.sizes(), net.sizes());
        assert_eq!(loaded, net);
    }
}

#[test]
fn file_size_matches_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("net.bin");
    let net = random_net(&[3, 4, 2], 7);
    net.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 4 + 3 * 4 + 8 * net.parameter_count());
    assert_eq!(&bytes[..16], &[0u8, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 2]);

    // First weight is row 0, column 0 of layer 0; the last value is the final bias.
    assert_eq!(&bytes[16..24], &net.weights()[0].data[0][0].to_be_bytes());
    assert_eq!(&bytes[bytes.len() - 8..], &net.biases()[1][1].to_be_bytes());
}

#[test]
fn extreme_values_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("net.bin");
    let mut w = Network::new(&[2, 1]).unwrap().weights().to_vec();
    w[0].data[0] = vec![f64::MIN_POSITIVE, -1.0e308];
    let net = Network::from_parameters(vec![2, 1], w, vec![vec![-0.0]]).unwrap();
    net.save(&path).unwrap();
    let loaded = Network::load(&path).unwrap();
    assert_eq!(loaded.weights()[0].data[0], vec![f64::MIN_POSITIVE, -1.0e308]);
    assert!(loaded.biases()[0][0].is_sign_negative());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Network::load(dir.path().join("absent.bin")), Err(NetError::Io(_))));
}

#[test]
fn truncated_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("net.bin");
    random_net(&[2, 2], 4).save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();
    assert!(matches!(Network::load(&path), Err(NetError::Io(_))));
}

#[test]
fn negative_size_in_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.bin");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&2i32.to_be_bytes());
    bytes.extend_from_slice(&(-1i32).to_be_bytes());
    bytes.extend_from_slice(&1i32.to_be_bytes());
    std::fs::write(&path, &bytes).unwrap();
    assert!(matches!(Network::load(&path), Err(NetError::Format(_))));
}

#[test]
fn json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("net.json");
    let path = path.to_str().unwrap();
    let net = random_net(&[3, 2, 2], 12);
    net.save_json(path).unwrap();
    assert_eq!(Network::load_json(path).unwrap(), net);
}

#[test]
fn json_with_inconsistent_shapes_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"sizes":[2,1],"weights":[{"rows":1,"cols":2,"data":[[1.0]]}],"biases":[[0.0]]}"#,
    ).unwrap();
    assert!(matches!(
        Network::load_json(path.to_str().unwrap()),
        Err(NetError::InvalidLayout(_))
    ));
}
