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

use std::{fs, path::{Path, PathBuf}};
use odin_gmt::{
    GmtSession, OdinGmtError, Result, Table, VirtualFile, Verbosity,
    session::{split_module_args, stage_table}
};

/// a GmtSession that records module calls and writes canned module output into the redirect target
#[derive(Debug,Default)]
pub struct MockSession {
    pub output: String,
    pub fail_with: Option<String>,
    pub verbosity: Option<Verbosity>,

    pub calls: Vec<(String,String)>,
    pub n_staged: usize,
    pub inputs: Vec<String>,       // contents of input files at the time of the call
    pub redirects: Vec<PathBuf>,
}

impl MockSession {
    pub fn with_output (output: &str)->Self {
        MockSession { output: output.to_string(), ..Default::default() }
    }

    pub fn failing (msg: &str)->Self {
        MockSession { fail_with: Some(msg.to_string()), ..Default::default() }
    }

    pub fn last_args (&self)->&str {
        self.calls.last().map( |c| c.1.as_str()).unwrap_or("")
    }
}

impl GmtSession for MockSession {
    fn virtualfile_from_table (&mut self, table: &Table)->Result<VirtualFile> {
        self.n_staged += 1;
        stage_table( table, None)
    }

    fn call_module (&mut self, module: &str, args: &str)->Result<()> {
        self.calls.push( (module.to_string(), args.to_string()));
        let (argv, redirect) = split_module_args( args);

        if let Some(path) = &redirect { self.redirects.push( path.clone()) }
        if let Some(first) = argv.first() {
            if Path::new(first).is_file() { self.inputs.push( fs::read_to_string(first)?) }
        }

        if let Some(msg) = &self.fail_with {
            return Err( OdinGmtError::ModuleError { module: module.to_string(), status: "exit status: 1".into(), stderr: msg.clone() })
        }

        if let Some(path) = redirect {
            fs::write( path, &self.output)?;
        }
        Ok(())
    }

    fn default_verbosity (&self)->Option<Verbosity> { self.verbosity }
}

/// tab separated rows of `n_cols` numbers
pub fn numeric_output (n_rows: usize, n_cols: usize)->String {
    let mut s = String::new();
    for r in 0..n_rows {
        let row: Vec<String> = (0..n_cols).map( |c| format!("{}", r * 10 + c)).collect();
        s.push_str( &row.join("\t"));
        s.push('\n');
    }
    s
}
