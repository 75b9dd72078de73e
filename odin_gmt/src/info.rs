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

//! adapter for the GMT `info` module, which reports extreme values of table columns (optionally rounded to
//! increments, e.g. to obtain a `-R` region for other modules)

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::{
    args::{ArgList, GmtOptions, Verbosity},
    errors::{Result, invalid_input},
    project::Points,
    session::GmtSession,
};

pub const INFO_MODULE: &str = "info";

/// grid registration (`-r`)
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,clap::ValueEnum)]
pub enum Registration {
    Gridline,
    Pixel,
}

impl fmt::Display for Registration {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            Registration::Gridline => f.write_str("g"),
            Registration::Pixel => f.write_str("p")
        }
    }
}

#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct InfoOptions {
    /// report min/max per column in separate columns (`-C`)
    #[serde(default)] pub per_column: bool,
    /// round min/max of the leading columns to multiples of these increments (`-I`)
    pub spacing: Option<Vec<f64>>,
    /// `dz[+c col]` report `zmin zmax dz` of a column rounded to multiples of dz (`-T`)
    pub nearest_multiple: Option<String>,
    pub verbosity: Option<Verbosity>,
    pub aspatial: Option<String>,
    pub coltypes: Option<String>,
    pub registration: Option<Registration>,
}

impl InfoOptions {
    /// do these options produce tabular (numeric) output
    pub fn has_array_output (&self)->bool {
        self.per_column || self.spacing.is_some() || self.nearest_multiple.is_some()
    }
}

impl GmtOptions for InfoOptions {
    fn to_args (&self)->ArgList {
        let mut args = ArgList::new();
        args.flag( 'C', self.per_column)
            .sequence( 'I', self.spacing.as_deref())
            .scalar( 'T', self.nearest_multiple.as_ref())
            .scalar( 'V', self.verbosity)
            .scalar( 'a', self.aspatial.as_ref())
            .scalar( 'f', self.coltypes.as_ref())
            .scalar( 'r', self.registration);
        args
    }
}

#[derive(Debug,Clone,PartialEq)]
pub enum InfoOutput {
    /// the plain module output
    Text(String),
    /// rows of numbers (for per_column, spacing and nearest_multiple)
    Numbers(Vec<Vec<f64>>),
    /// array output that has non-numeric values such as date strings
    Strings(Vec<Vec<String>>),
}

/// turn array output such as `-R0/1/2/3`, `-T0/9/1` or per column min/max records into rows of values
pub fn parse_array_output (raw: &str)->InfoOutput {
    let text = match raw.strip_prefix("-R").or_else( || raw.strip_prefix("-T")) {
        Some(rest) => rest.replace('/', " "),
        None => raw.to_string()
    };

    let rows: Vec<Vec<String>> = text.lines()
        .map( |line| line.trim())
        .filter( |line| !line.is_empty() && !line.starts_with('#'))
        .map( |line| line.split_whitespace().map( |t| t.to_string()).collect())
        .collect();

    let numbers: Option<Vec<Vec<f64>>> = rows.iter()
        .map( |row| row.iter().map( |t| t.parse::<f64>().ok()).collect::<Option<Vec<f64>>>())
        .collect();

    match numbers {
        Some(numbers) => InfoOutput::Numbers(numbers),
        None => InfoOutput::Strings(rows)
    }
}

/// run GMT `info` on a table or data file
pub fn info<S: GmtSession> (session: &mut S, data: Points, opts: &InfoOptions)->Result<InfoOutput> {
    let mut args = opts.to_args();
    if !args.contains('V') {
        args.scalar( 'V', session.default_verbosity());
    }

    let tmp_out = session.temp_output(".txt")?;
    let redirect = tmp_out.redirect()?;
    {
        let vfile = match data {
            Points::Table(table) => session.virtualfile_from_table( table)?,
            Points::File(path) => session.virtualfile_from_path( path)?,
            Points::None => return Err( invalid_input!("info requires a table or a data file"))
        };

        let arg_str = [vfile.name()?, args.to_arg_string(), redirect].iter()
            .filter( |a| !a.is_empty())
            .cloned()
            .collect::<Vec<String>>()
            .join(" ");
        session.call_module( INFO_MODULE, &arg_str)?;
    }

    let raw = tmp_out.read_to_string()?;
    if opts.has_array_output() {
        Ok( parse_array_output( &raw))
    } else {
        Ok( InfoOutput::Text(raw))
    }
}
