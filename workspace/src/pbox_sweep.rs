use std::path::PathBuf;
use log::{ debug, info };
use ndarray as nd;
use whooie::{ mkdir, write_npz };
use pbox::{
    grid::SpatialGrid,
    model,
    plot::{ anim, sweep::QuantumSweep, FigureSize },
    units,
    PhysicalConstants,
    QuantumNumber,
};

// electron in a 1 m box; SI units throughout
const BOX_LENGTH: f64 = 1.0; // m
const HBAR: f64 = units::hbar_2014; // J s
const MASS: f64 = units::me_2014; // kg
const GRID_POINTS: usize = pbox::DEF_GRID_POINTS;
const N_MAX: u32 = pbox::DEF_N_MAX;
const FPS: u32 = 1;
const FIG_SIZE: (f64, f64) = (10.0, 12.0); // in
const DPI: u32 = 100;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let consts = PhysicalConstants::new(BOX_LENGTH, HBAR, MASS)?;
    let grid = SpatialGrid::new(&consts, GRID_POINTS)?;
    for n in QuantumNumber::up_to(N_MAX) {
        let nodes = model::nodes(&consts, n, grid.x())?;
        debug!("n = {}: {} nodes at {:.3?}", n, nodes.len(), nodes);
    }

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    let sweep
        = QuantumSweep::new(consts, grid.clone(), N_MAX)?
        .with_frame_delay(1000 / FPS);
    anim::save_gif(
        &sweep,
        outdir.join("particle_in_a_box_animation.gif"),
        FigureSize::new(FIG_SIZE.0, FIG_SIZE.1, DPI),
    )?;

    let energies: nd::Array1<f64> = model::energies(&consts, N_MAX);
    let wfs: nd::Array2<f64>
        = QuantumNumber::up_to(N_MAX)
        .flat_map(|n| model::psi_arr(&consts, n, grid.x()).to_vec())
        .collect::<nd::Array1<f64>>()
        .into_shape((N_MAX as usize, grid.len()))?;
    info!("ladder spans {:.3e} J to {:.3e} J", energies[1], energies[N_MAX as usize]);

    write_npz!(
        outdir.join("particle_in_a_box_animation.npz"),
        arrays: {
            "x" => grid.x(),
            "e" => &energies,
            "wf" => &wfs,
        }
    );
    Ok(())
}
