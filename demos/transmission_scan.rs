use ndarray as nd;
use sqwell::{ config::ScatterConfig, scatter, sweep, units };

// transmission of electrons over a 10 eV, 2 Å wide well as a function of
// incident energy

fn main() {
    let base = ScatterConfig::default();
    let uu = base.units();
    let energies: nd::Array1<f64>
        = nd::Array1::linspace(0.5, 100.0, 200).mapv(|e| e * units::e);

    let t = sweep::energy_scan_transmission(&base, energies.as_slice().unwrap());
    println!("{:>10} {:>12} {:>12} {:>12}", "E (eV)", "E (nat)", "T", "T (exact)");
    for (e, tk) in energies.iter().zip(t) {
        let config = base.with_energy(*e);
        let t_exact = scatter::transmission_exact(&config).unwrap();
        let e_nat: f64 = uu.to_nat_energy(*e);
        println!(
            "{:>10.3} {:>12.5} {:>12.8} {:>12.8}",
            e / units::e, e_nat, tk.unwrap(), t_exact,
        );
    }
}
