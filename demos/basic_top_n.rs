use topnkit::ds::TopNSelector;

fn main() {
    let mut top: TopNSelector<&str, f64> = TopNSelector::new(2).unwrap();

    println!("offer a=1.0: {}", top.offer("a", 1.0));
    println!("offer b=3.0: {}", top.offer("b", 3.0));
    println!("offer c=2.0: {}", top.offer("c", 2.0));
    println!("offer d=0.5: {}", top.offer("d", 0.5));

    for entry in top.drain_sorted() {
        println!("{} {}", entry.key(), entry.score());
    }
    println!("size after drain: {}", top.size());
}

// Expected output:
// offer a=1.0: true
// offer b=3.0: true
// offer c=2.0: true
// offer d=0.5: false
// b 3
// c 2
// size after drain: 0
//
// Explanation: capacity=2; "c" displaces the smallest retained entry "a",
// while "d" scores below the current minimum and is rejected.
