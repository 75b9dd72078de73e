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

//! adapter for the GMT `project` module: project (x,y[,z..]) data onto lines or great circles, or generate
//! (r,s,p) tracks along a profile.
//!
//! A projection is defined by a center and either an azimuth, an endpoint or a rotation pole. Output columns
//! are any combination of `xyzpqrs`, where `p,q` are the coordinates in the projection, `r,s` the position on
//! the profile closest to the input point and `z` stands for all input columns beyond the leading x and y.
//! The computation itself happens in GMT

use std::{fmt, path::Path, str::FromStr};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    args::{ArgList, GmtOptions, Verbosity, join_sequence, parse_pair},
    errors::{OdinGmtError, Result, invalid_input},
    session::{GmtSession, redirect_arg},
    table::{Table, read_tsv_file}
};

pub const PROJECT_MODULE: &str = "project";

/// output columns if no flags are given
pub const DEFAULT_FLAGS: &str = "xyzpqrs";

/// hardwired output columns of generate mode
pub const GENERATE_COLUMNS: [&str;3] = ["r", "s", "p"];

/* #region option values ************************************************************************************/

/// `-L` length window
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum Length {
    /// only the span from center to endpoint (`w`)
    Endpoint,
    /// `l_min < p < l_max`
    Range(f64,f64),
}

impl fmt::Display for Length {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            Length::Endpoint => f.write_str("w"),
            Length::Range(min,max) => f.write_str( &join_sequence( &[*min, *max]))
        }
    }
}

impl FromStr for Length {
    type Err = OdinGmtError;

    fn from_str (s: &str)->Result<Self> {
        if s == "w" {
            Ok( Length::Endpoint)
        } else {
            let [min,max] = parse_pair(s)?;
            Ok( Length::Range(min,max))
        }
    }
}

/// `-G` generate mode: create (r,s,p) points every `dist` units of p
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Generate {
    pub dist: f64,
    /// small circle colatitude (great circle if not set)
    pub colat: Option<f64>,
    /// compute the colatitude so that the small circle goes through the center (`+c`)
    pub through_center: bool,
    /// report the pole position as segment header (`+h`)
    pub pole_header: bool,
}

impl Generate {
    pub fn every (dist: f64)->Self {
        Generate { dist, colat: None, through_center: false, pole_header: false }
    }
}

impl fmt::Display for Generate {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "{}", self.dist)?;
        if let Some(colat) = self.colat { write!( f, "/{colat}")? }
        if self.through_center { f.write_str("+c")? }
        if self.pole_header { f.write_str("+h")? }
        Ok(())
    }
}

impl FromStr for Generate {
    type Err = OdinGmtError;

    fn from_str (s: &str)->Result<Self> {
        let mut parts = s.split('+');
        let base = parts.next().unwrap_or("");
        let mut generate = match base.split_once('/') {
            Some((dist,colat)) => Generate { colat: Some( parse_number(colat)?), ..Generate::every( parse_number(dist)?) },
            None => Generate::every( parse_number(base)?)
        };

        for modifier in parts {
            match modifier {
                "c" => generate.through_center = true,
                "h" => generate.pole_header = true,
                _ => return Err( invalid_input!("unknown generate modifier '+{}'", modifier))
            }
        }
        Ok(generate)
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum EllipseShape {
    /// major and minor axes (km unless flat earth) and azimuth of the major axis
    Axes { major: f64, minor: f64, azimuth: f64 },
    /// degenerate ellipse, optionally with unit (e.g. "3d")
    Diameter(String),
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum EllipseAdjust {
    /// adjust the generate increment to get equal distances (`+e`)
    EqualIncrements,
    /// interpret the generate increment as number of unique points (`+n`)
    NumPoints,
}

/// `-Z` ellipse definition, used together with center and generate
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Ellipse {
    pub shape: EllipseShape,
    pub adjust: Option<EllipseAdjust>,
}

impl fmt::Display for Ellipse {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match &self.shape {
            EllipseShape::Axes{major,minor,azimuth} => f.write_str( &join_sequence( &[*major, *minor, *azimuth]))?,
            EllipseShape::Diameter(d) => f.write_str(d)?
        }
        match self.adjust {
            Some(EllipseAdjust::EqualIncrements) => f.write_str("+e"),
            Some(EllipseAdjust::NumPoints) => f.write_str("+n"),
            None => Ok(())
        }
    }
}

impl FromStr for Ellipse {
    type Err = OdinGmtError;

    fn from_str (s: &str)->Result<Self> {
        let (base, adjust) = if let Some(b) = s.strip_suffix("+e") {
            (b, Some(EllipseAdjust::EqualIncrements))
        } else if let Some(b) = s.strip_suffix("+n") {
            (b, Some(EllipseAdjust::NumPoints))
        } else {
            (s, None)
        };

        let parts: Vec<&str> = base.split('/').collect();
        let shape = match parts.as_slice() {
            [major, minor, azimuth] => EllipseShape::Axes {
                major: parse_number(major)?, minor: parse_number(minor)?, azimuth: parse_number(azimuth)?
            },
            [diameter] if !diameter.is_empty() => EllipseShape::Diameter( diameter.to_string()),
            _ => return Err( invalid_input!("not a valid ellipse spec: '{}'", s))
        };

        Ok( Ellipse { shape, adjust })
    }
}

fn parse_number (s: &str)->Result<f64> {
    s.trim().parse::<f64>().map_err( |_| invalid_input!("not a number: '{}'", s))
}

/* #endregion option values */

/// the named `project` options. Each field maps to a fixed GMT flag:
///
/// | field        | flag | value               |
/// |--------------|------|---------------------|
/// | azimuth      | `A`  | scalar              |
/// | endpoint     | `E`  | `bx/by`             |
/// | flags        | `F`  | output column spec  |
/// | generate     | `G`  | `dist[/colat][+c][+h]` |
/// | length       | `L`  | `w` or `min/max`    |
/// | flatearth    | `N`  | presence            |
/// | maptypeunits | `Q`  | presence            |
/// | sort         | `S`  | presence            |
/// | rotationpole | `T`  | `px/py`             |
/// | verbosity    | `V`  | level               |
/// | width        | `W`  | `min/max`           |
/// | ellipse      | `Z`  | `major/minor/azimuth[+e\|+n]` |
/// | coltypes     | `f`  | column type spec    |
///
/// The center is not part of this record since it is always required
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct ProjectOptions {
    pub azimuth: Option<f64>,
    pub endpoint: Option<[f64;2]>,
    pub flags: Option<String>,
    pub generate: Option<Generate>,
    pub length: Option<Length>,
    #[serde(default)] pub flatearth: bool,
    #[serde(default)] pub maptypeunits: bool,
    #[serde(default)] pub sort: bool,
    pub rotationpole: Option<[f64;2]>,
    pub verbosity: Option<Verbosity>,
    pub width: Option<[f64;2]>,
    pub ellipse: Option<Ellipse>,
    pub coltypes: Option<String>,
}

impl GmtOptions for ProjectOptions {
    fn to_args (&self)->ArgList {
        let mut args = ArgList::new();
        args.scalar( 'A', self.azimuth)
            .sequence( 'E', self.endpoint.as_ref().map( |p| &p[..]))
            .scalar( 'F', self.flags.as_ref())
            .scalar( 'G', self.generate.as_ref())
            .scalar( 'L', self.length.as_ref())
            .flag( 'N', self.flatearth)
            .flag( 'Q', self.maptypeunits)
            .flag( 'S', self.sort)
            .sequence( 'T', self.rotationpole.as_ref().map( |p| &p[..]))
            .scalar( 'V', self.verbosity)
            .sequence( 'W', self.width.as_ref().map( |p| &p[..]))
            .scalar( 'Z', self.ellipse.as_ref())
            .scalar( 'f', self.coltypes.as_ref());
        args
    }
}

/// the option list of a project call. The center is always added as `-Ccx/cy`
pub fn build_project_args (center: [f64;2], opts: &ProjectOptions)->ArgList {
    let mut args = opts.to_args();
    args.sequence( 'C', Some( &center[..]));
    args
}

/// module input
#[derive(Debug,Clone,Copy)]
pub enum Points<'a> {
    Table(&'a Table),
    File(&'a Path),
    /// no input, which is only valid in generate mode
    None,
}

impl<'a> From<&'a Table> for Points<'a> {
    fn from (table: &'a Table)->Self { Points::Table(table) }
}

impl<'a> From<&'a Path> for Points<'a> {
    fn from (path: &'a Path)->Self { Points::File(path) }
}

/// how a project call is executed. This is decided once, based on the generate option
#[derive(Debug,Clone,Copy)]
enum Execution<'a> {
    /// synthetic track points, no input is read
    Generate,
    /// project the points of a table or data file
    TableDriven(TableInput<'a>),
}

#[derive(Debug,Clone,Copy)]
enum TableInput<'a> {
    Table(&'a Table),
    File(&'a Path),
}

impl<'a> Execution<'a> {
    fn select (opts: &ProjectOptions, points: Points<'a>)->Result<Self> {
        if opts.generate.is_some() {
            if opts.flags.is_some() {
                return Err( invalid_input!("output flags can't be used in generate mode (output is always 'rsp')"))
            }
            Ok( Execution::Generate)
        } else {
            match points {
                Points::Table(table) => Ok( Execution::TableDriven( TableInput::Table(table))),
                Points::File(path) => Ok( Execution::TableDriven( TableInput::File(path))),
                Points::None => Err( invalid_input!("no input points (need a table or a data file unless in generate mode)"))
            }
        }
    }
}

/// check that `flags` only contains output column letters `xyzpqrs`, each at most once
pub fn parse_flags (flags: &str)->Result<Vec<char>> {
    let mut letters: Vec<char> = Vec::with_capacity( flags.len());
    for c in flags.chars() {
        if !DEFAULT_FLAGS.contains(c) {
            return Err( invalid_input!("unknown output column '{}' in flags '{}' (use any of '{}')", c, flags, DEFAULT_FLAGS))
        }
        if letters.contains(&c) {
            return Err( invalid_input!("output column '{}' appears more than once in flags '{}'", c, flags))
        }
        letters.push(c);
    }
    if letters.is_empty() {
        return Err( invalid_input!("empty output flags"))
    }
    Ok(letters)
}

/// result column names for table driven mode: the `x` and `y` placeholders are replaced by the first two input
/// column names, `z` is replaced in place by all remaining input columns (which can be none)
pub fn output_column_names<S: AsRef<str>> (flags: Option<&str>, input_columns: &[S])->Result<Vec<String>> {
    let flags = flags.unwrap_or( DEFAULT_FLAGS);
    let letters = parse_flags( flags)?;

    for placeholder in ['x', 'y', 'z'] {
        if !letters.contains(&placeholder) {
            return Err( invalid_input!("output flags '{}' lack '{}', which is required to name result columns", flags, placeholder))
        }
    }
    if input_columns.len() < 2 {
        return Err( invalid_input!("input needs at least two (x,y) columns, got {}", input_columns.len()))
    }

    let mut names: Vec<String> = Vec::with_capacity( letters.len() + input_columns.len());
    for c in letters {
        match c {
            'x' => names.push( input_columns[0].as_ref().to_string()),
            'y' => names.push( input_columns[1].as_ref().to_string()),
            'z' => names.extend( input_columns[2..].iter().map( |s| s.as_ref().to_string())),
            _ => names.push( c.to_string())
        }
    }
    Ok(names)
}

/// run GMT `project` on `points`.
///
/// Without `outfile` the module output goes into a temp file that is parsed into the returned table, with
/// columns named after the input columns (see [`output_column_names`]) or `r,s,p` in generate mode.
/// If `outfile` is set the output is written there and no table is returned. Data files as input require
/// an `outfile` since their column names are not known. Paths that end up in the module argument string
/// (outfile, data file, temp files) must not contain whitespace.
pub fn project<S: GmtSession> (session: &mut S, points: Points, center: [f64;2], outfile: Option<&Path>, opts: &ProjectOptions)->Result<Option<Table>> {
    let execution = Execution::select( opts, points)?;

    let mut args = build_project_args( center, opts);
    if !args.contains('V') {
        args.scalar( 'V', session.default_verbosity());
    }

    let column_names = match (execution, outfile) {
        (_, Some(_)) => {
            if let Some(flags) = &opts.flags { parse_flags( flags)?; }
            None
        }
        (Execution::Generate, None) => Some( GENERATE_COLUMNS.iter().map( |c| c.to_string()).collect()),
        (Execution::TableDriven( TableInput::Table(table)), None) => {
            Some( output_column_names( opts.flags.as_deref(), table.column_names())?)
        }
        (Execution::TableDriven( TableInput::File(path)), None) => {
            return Err( invalid_input!("data file input {:?} requires an outfile", path))
        }
    };

    let tmp_out = session.temp_output(".csv")?;
    let redirect = match outfile {
        Some(path) => redirect_arg( path)?,
        None => tmp_out.redirect()?
    };
    let arg_str = args.to_arg_string();

    match execution {
        Execution::Generate => {
            session.call_module( PROJECT_MODULE, &[arg_str, redirect].join(" "))?;
        }
        Execution::TableDriven(input) => {
            let vfile = match input {
                TableInput::Table(table) => session.virtualfile_from_table( table)?,
                TableInput::File(path) => session.virtualfile_from_path( path)?
            };
            session.call_module( PROJECT_MODULE, &[vfile.name()?, arg_str, redirect].join(" "))?;
        }
    }

    match column_names {
        Some(names) => {
            debug!("reading project output columns {:?}", names);
            Ok( Some( read_tsv_file( tmp_out.path(), &names)?))
        }
        None => Ok(None)
    }
}
