use nexthash256::{nexthash, nexthash_hex};

fn main() {
    let input = "Hello, world!";
    let digest = nexthash(input.as_bytes());
    println!("Input: {}", input);
    println!("Input hex: {}", hex::encode(input.as_bytes()));
    println!("Digest: {}", hex::encode(digest));

    let input2 = "Hello, world";
    println!("Input 2: {}", input2);
    println!("Digest 2: {}", nexthash_hex(input2.as_bytes()));
}
