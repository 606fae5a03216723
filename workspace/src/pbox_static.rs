use std::path::PathBuf;
use log::info;
use ndarray as nd;
use whooie::{ mkdir, write_npz };
use pbox::{
    grid::SpatialGrid,
    model,
    plot::{ figure::StaticFigure, FigureSize },
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
const FIG_SIZE: (f64, f64) = (10.0, 12.0); // in
const DPI: u32 = 100;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let consts = PhysicalConstants::new(BOX_LENGTH, HBAR, MASS)?;
    let grid = SpatialGrid::new(&consts, GRID_POINTS)?;
    let energies: nd::Array1<f64> = model::energies(&consts, N_MAX);
    let uu = consts.units();
    energies.iter().enumerate().skip(1)
        .for_each(|(n, en)| {
            let en_nat: f64 = uu.to_nat_energy(*en);
            info!("E_{} = {:.3e} J ({:.4} natural units)", n, en, en_nat);
        });

    let psis: Vec<nd::Array1<f64>>
        = QuantumNumber::up_to(N_MAX)
        .map(|n| model::psi_arr(&consts, n, grid.x()))
        .collect();
    let wfs: nd::Array2<f64>
        = nd::stack(
            nd::Axis(0),
            &psis.iter().map(|wf| wf.view()).collect::<Vec<_>>(),
        )?;
    let densities: nd::Array2<f64> = wfs.mapv(|wk| wk * wk);

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    let fig
        = StaticFigure::new(consts, grid.clone(), N_MAX)?
        .with_energy_unit("J");
    fig.save_png(
        outdir.join("particle_in_a_box_visualization.png"),
        FigureSize::new(FIG_SIZE.0, FIG_SIZE.1, DPI),
    )?;

    write_npz!(
        outdir.join("particle_in_a_box_visualization.npz"),
        arrays: {
            "L" => &nd::array![BOX_LENGTH],
            "hbar" => &nd::array![HBAR],
            "m" => &nd::array![MASS],
            "x" => grid.x(),
            "e" => &energies,
            "wf" => &wfs,
            "density" => &densities,
        }
    );
    Ok(())
}
