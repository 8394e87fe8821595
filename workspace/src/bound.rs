use std::path::PathBuf;
use anyhow::Context;
use ndarray as nd;
use whooie::{ mkdir, write_npz };
use sqwell::{ config::{ BoundConfig, EigenOpts }, solve };

// lowest stationary states of a deep, narrow well in reduced units

fn main() -> anyhow::Result<()> {
    let config = BoundConfig::default();
    let states = solve::solve_bound(&config, EigenOpts::default(), true)?;
    let energies: nd::Array1<f64> = states.energies();
    let wfs: nd::Array2<f64>
        = states.wavefunctions().context("missing wavefunctions")?;

    for (n, e) in energies.iter().enumerate() {
        let e_inf = solve::infinite_well_energy(
            n, config.width, config.hbar2_2m, config.v0);
        println!("n={n}: E = {e:.2} (infinite well: {e_inf:.2})");
    }

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("bound.npz"),
        arrays: {
            "x" => states.get_x(),
            "v" => states.get_V(),
            "e" => &energies,
            "wf" => &wfs,
        }
    );
    Ok(())
}
