use ndarray as nd;
use sqwell::{ config::{ BoundConfig, EigenOpts }, solve, sweep };

// track the lowest levels of a well of fixed width as it is made deeper,
// relative to the floor of the well and to the infinitely deep limit

fn main() {
    const N_STATES: usize = 3;

    let base = BoundConfig::default()
        .with_grid(1.0, 2001)
        .with_well(0.4, 0.2)
        .with_n_states(N_STATES);
    let depths: nd::Array1<f64> = nd::Array1::logspace(10.0, 2.0, 6.0, 9);
    let depths: Vec<f64> = depths.iter().map(|d| -d).collect();

    let scan = sweep::depth_scan_bound(&base, &depths, EigenOpts::default());
    println!("{:>12} {:>4} {:>14} {:>10}", "v0", "n", "e - v0", "ratio");
    for (v0, res) in depths.iter().zip(scan) {
        let energies = res.unwrap();
        for (n, e) in energies.iter().enumerate() {
            let e_inf = solve::infinite_well_energy(n, base.width, base.hbar2_2m, *v0);
            println!(
                "{:>12.3e} {:>4} {:>14.6e} {:>10.6}",
                v0, n, e - v0, (e - v0) / (e_inf - v0),
            );
        }
    }
}
