use neuralnet::train::mean_squared_error;
use neuralnet::{train_loop, InMemorySet, Network, Sgd, TrainConfig};

fn main() -> neuralnet::Result<()> {
    let mut rng = rand::thread_rng();

    let mut network = Network::new(&[2, 3, 1])?;
    network.randomize(&mut rng);

    let set = InMemorySet::new(
        vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ],
        vec![
            vec![1.0],
            vec![0.0],
            vec![1.0],
            vec![0.0],
        ],
    )?;

    let optimizer = Sgd::new(3.0);
    let config = TrainConfig::new(1000, 2);

    for round in 0..10 {
        train_loop(&mut network, &set, None, &optimizer, &config, &mut rng)?;
        println!("Round {round}: cost = {:.6}", mean_squared_error(&network, &set)?);
    }

    for input in set.inputs() {
        println!("Input: {:?} -> Output: {:.4}", input, network.feed_forward(input)?[0]);
    }
    Ok(())
}
