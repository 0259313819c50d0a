use nexthash256::analysis::{
    avalanche_fraction, cancellation_matrix, min_cancellation_weight, mix_ratio,
    verify_test_vectors,
};

fn main() {
    let msg = b"The quick brown fox jumps over the lazy dog";
    println!("--- NEXTHASH-256 security-property report ---");

    let frac = avalanche_fraction(msg, 0);
    println!(
        "Avalanche (bit 0 of {}-byte reference message): {:.2}% of 256 bits",
        msg.len(),
        frac * 100.0
    );

    let matrix = cancellation_matrix();
    println!(
        "Sigma cancellation matrix: min weight {}",
        min_cancellation_weight(&matrix)
    );

    let mix = mix_ratio();
    println!(
        "Mix ratio: {} mixing / {} invertible ops per round, ratio {:.3}, score {:.2}",
        mix.mixing,
        mix.invertible,
        mix.ratio(),
        mix.score()
    );

    println!("Known-answer vectors:");
    for check in verify_test_vectors() {
        let label = if check.input.len() > 24 {
            format!("{}... ({} bytes)", &check.input[..24], check.input.len())
        } else {
            format!("{:?}", check.input)
        };
        println!(
            "  {} {} -> {}",
            if check.pass { "PASS" } else { "FAIL" },
            label,
            check.actual
        );
    }
}
