/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::{fs::File, path::{Path, PathBuf}};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use odin_gmt::{
    info, load_config, parse_pair, project, read_tsv_table, Ellipse, Generate, GmtCli, GmtConfig, InfoOptions,
    InfoOutput, Length, Points, ProjectOptions, Registration, Table, Verbosity
};

#[derive(Parser, Debug)]
#[command(version, about = "run GMT project/info on tab separated data files")]
struct Args {
    /// RON config file for GMT access (uses 'gmt' from PATH if not set)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// first line of input file holds column names
    #[arg(long)]
    header: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// project data onto lines or great circles, or generate tracks
    Project {
        /// projection origin cx/cy
        #[arg(short='C', long, value_parser = parse_pair, allow_hyphen_values = true)]
        center: [f64;2],

        #[arg(short='A', long, allow_hyphen_values = true)]
        azimuth: Option<f64>,

        /// end point bx/by of the projection path
        #[arg(short='E', long, value_parser = parse_pair, allow_hyphen_values = true)]
        endpoint: Option<[f64;2]>,

        /// output columns, any combination of 'xyzpqrs'
        #[arg(short='F', long)]
        flags: Option<String>,

        /// dist[/colat][+c][+h] generate mode (input is ignored)
        #[arg(short='G', long)]
        generate: Option<Generate>,

        /// 'w' or l_min/l_max
        #[arg(short='L', long, allow_hyphen_values = true)]
        length: Option<Length>,

        /// Cartesian instead of spherical computation
        #[arg(short='N', long)]
        flatearth: bool,

        /// x,y,r,s in degrees and p,q,dist in km
        #[arg(short='Q', long)]
        maptypeunits: bool,

        /// sort output by increasing p
        #[arg(short='S', long)]
        sort: bool,

        /// rotation pole px/py
        #[arg(short='T', long, value_parser = parse_pair, allow_hyphen_values = true)]
        rotationpole: Option<[f64;2]>,

        #[arg(short='V', long, value_enum)]
        verbosity: Option<Verbosity>,

        /// w_min/w_max
        #[arg(short='W', long, value_parser = parse_pair, allow_hyphen_values = true)]
        width: Option<[f64;2]>,

        /// major/minor/azimuth[+e|+n] or diameter
        #[arg(short='Z', long)]
        ellipse: Option<Ellipse>,

        #[arg(short='f', long)]
        coltypes: Option<String>,

        /// write module output to this file instead of stdout (input file is then passed to GMT as is)
        #[arg(short, long)]
        outfile: Option<PathBuf>,

        /// tab separated input data file
        input: Option<PathBuf>,
    },

    /// report column extremes of a data file
    Info {
        #[arg(short='C', long)]
        per_column: bool,

        /// dx[/dy..] round extremes to multiples of these increments
        #[arg(short='I', long, value_delimiter = '/')]
        spacing: Option<Vec<f64>>,

        /// dz[+c col]
        #[arg(short='T', long)]
        nearest_multiple: Option<String>,

        #[arg(short='V', long, value_enum)]
        verbosity: Option<Verbosity>,

        #[arg(short='f', long)]
        coltypes: Option<String>,

        #[arg(short='r', long, value_enum)]
        registration: Option<Registration>,

        input: PathBuf,
    },
}

/// read the input file ourselves if we need its column names or if it has a header line GMT would not
/// know about. Otherwise the file is passed on to GMT as is
fn load_input (input: Option<&Path>, need_columns: bool, has_header: bool)->Result<Option<Table>> {
    match input {
        Some(path) if need_columns || has_header => Ok( Some( read_tsv_table( File::open(path)?, has_header)?)),
        _ => Ok(None)
    }
}

fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();

    let args = Args::parse();
    let config: GmtConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => GmtConfig::default()
    };
    let mut session = GmtCli::new( &config);

    match args.cmd {
        Cmd::Project { center, azimuth, endpoint, flags, generate, length, flatearth, maptypeunits, sort,
                       rotationpole, verbosity, width, ellipse, coltypes, outfile, input } => {
            let opts = ProjectOptions {
                azimuth, endpoint, flags, generate, length, flatearth, maptypeunits, sort,
                rotationpole, verbosity, width, ellipse, coltypes
            };

            let table = load_input( input.as_deref(), outfile.is_none(), args.header)?;
            let points = match (&table, &input) {
                (Some(table), _) => Points::Table(table),
                (None, Some(path)) => Points::File(path.as_path()),
                (None, None) => Points::None
            };

            if let Some(result) = project( &mut session, points, center, outfile.as_deref(), &opts)? {
                print!("{}", result.to_tsv_string()?);
            }
        }

        Cmd::Info { per_column, spacing, nearest_multiple, verbosity, coltypes, registration, input } => {
            let opts = InfoOptions { per_column, spacing, nearest_multiple, verbosity, coltypes, registration, ..Default::default() };

            let table = load_input( Some(input.as_path()), false, args.header)?;
            let points = match &table {
                Some(table) => Points::Table(table),
                None => Points::File(input.as_path())
            };

            match info( &mut session, points, &opts)? {
                InfoOutput::Text(s) => print!("{s}"),
                InfoOutput::Numbers(rows) => {
                    for row in rows {
                        println!("{}", row.iter().map( |x| x.to_string()).collect::<Vec<String>>().join("\t"))
                    }
                }
                InfoOutput::Strings(rows) => {
                    for row in rows { println!("{}", row.join("\t")) }
                }
            }
        }
    }

    Ok(())
}
