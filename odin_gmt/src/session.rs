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

//! the boundary to GMT itself.
//! Module adapters only talk to a [`GmtSession`], which stages input tables as virtual files and executes
//! named modules with an argument string. Output is redirected into files with a `->path` argument token.
//! [`GmtCli`] is the session that runs the `gmt` executable

use std::{fs::File, io::Write, path::{Path, PathBuf}, process::{Command, Stdio}};
use tempfile::{Builder, TempPath};
use tracing::{debug, info};

use crate::{
    args::Verbosity,
    config::GmtConfig,
    errors::{OdinGmtError, Result, invalid_input},
    table::Table
};

/// module input reference. Staged files are removed when this is dropped, pass-through paths are left alone
#[derive(Debug)]
pub enum VirtualFile {
    Staged(TempPath),
    PassThrough(PathBuf),
}

impl VirtualFile {
    pub fn path (&self)->&Path {
        match self {
            VirtualFile::Staged(p) => &**p,
            VirtualFile::PassThrough(p) => p.as_path()
        }
    }

    /// the name used to reference this file in a module argument string
    pub fn name (&self)->Result<String> {
        arg_path( self.path())
    }

    pub fn is_staged (&self)->bool { matches!( self, VirtualFile::Staged(_)) }
}

/// a temporary module output file that is deleted when it goes out of scope, no matter if it was used or not
#[derive(Debug)]
pub struct TempOutput {
    path: TempPath,
}

impl TempOutput {
    pub fn new (dir: Option<&Path>, suffix: &str)->Result<Self> {
        let mut builder = Builder::new();
        builder.prefix("odin_gmt-").suffix(suffix);

        // we only keep the path - GMT has to be able to write to it
        let file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?
        };
        Ok( TempOutput { path: file.into_temp_path() } )
    }

    pub fn path (&self)->&Path { &self.path }

    /// the `->path` token that redirects module output into this file
    pub fn redirect (&self)->Result<String> { redirect_arg( self.path()) }

    pub fn read_to_string (&self)->Result<String> {
        Ok( std::fs::read_to_string( self.path())? )
    }
}

pub fn redirect_arg (path: &Path)->Result<String> {
    Ok( format!("->{}", arg_path( path)?))
}

/// `path` as module argument token. Argument strings are whitespace separated, hence paths with whitespace
/// can't be referenced
pub fn arg_path (path: &Path)->Result<String> {
    let s = path.to_string_lossy();
    if s.is_empty() {
        Err( invalid_input!("empty path"))
    } else if s.chars().any( char::is_whitespace) {
        Err( invalid_input!("path {:?} contains whitespace, which is not supported in GMT module arguments", path))
    } else {
        Ok( s.into_owned())
    }
}

/// write `table` as tab separated temp file in `dir` (or the system temp dir)
pub fn stage_table (table: &Table, dir: Option<&Path>)->Result<VirtualFile> {
    let mut builder = Builder::new();
    builder.prefix("odin_gmt-vf-").suffix(".tsv");

    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?
    };
    table.write_tsv( file.as_file_mut())?;
    file.as_file_mut().flush()?;

    Ok( VirtualFile::Staged( file.into_temp_path()) )
}

/// what module adapters need from GMT
pub trait GmtSession {
    /// make an in-memory table available as module input
    fn virtualfile_from_table (&mut self, table: &Table)->Result<VirtualFile>;

    /// reference an existing data file as module input
    fn virtualfile_from_path (&mut self, path: &Path)->Result<VirtualFile> {
        Ok( VirtualFile::PassThrough( path.to_path_buf()) )
    }

    /// execute `module` with the given argument string. Failures of the module are returned unmodified
    fn call_module (&mut self, module: &str, args: &str)->Result<()>;

    fn temp_output (&self, suffix: &str)->Result<TempOutput> {
        TempOutput::new( None, suffix)
    }

    /// verbosity for calls that don't specify one
    fn default_verbosity (&self)->Option<Verbosity> { None }
}

/// split a module argument string into command line arguments and an optional output redirection.
/// Note that tokens are whitespace separated, i.e. file names must not contain spaces
pub fn split_module_args (args: &str)->(Vec<String>, Option<PathBuf>) {
    let mut argv: Vec<String> = Vec::new();
    let mut redirect: Option<PathBuf> = None;

    for tok in args.split_whitespace() {
        if let Some(path) = tok.strip_prefix("->") {
            redirect = Some( PathBuf::from(path));
        } else {
            argv.push( tok.to_string());
        }
    }

    (argv, redirect)
}

/// a session that runs modules as `<gmt_cmd> <module> <args..>` child processes
#[derive(Debug,Clone)]
pub struct GmtCli {
    gmt_cmd: String,
    tmp_dir: Option<PathBuf>,
    verbosity: Option<Verbosity>,
}

impl GmtCli {
    pub fn new (config: &GmtConfig)->Self {
        GmtCli {
            gmt_cmd: config.gmt_cmd.clone(),
            tmp_dir: config.tmp_dir.clone(),
            verbosity: config.verbosity,
        }
    }

    pub fn gmt_cmd (&self)->&str { self.gmt_cmd.as_str() }
}

impl Default for GmtCli {
    fn default()->Self { GmtCli::new( &GmtConfig::default()) }
}

impl GmtSession for GmtCli {
    fn virtualfile_from_table (&mut self, table: &Table)->Result<VirtualFile> {
        stage_table( table, self.tmp_dir.as_deref())
    }

    fn call_module (&mut self, module: &str, args: &str)->Result<()> {
        let (argv, redirect) = split_module_args( args);

        let mut cmd = Command::new( &self.gmt_cmd);
        cmd.arg( module).args( &argv);
        if let Some(path) = &redirect {
            cmd.stdout( Stdio::from( File::create(path)?));
        }
        debug!("executing {cmd:?}");

        let output = cmd.output()?;
        if output.status.success() {
            info!("{} {} completed with status {}", self.gmt_cmd, module, output.status);
            if redirect.is_none() && !output.stdout.is_empty() {
                debug!("{} output: {}", module, String::from_utf8_lossy( &output.stdout));
            }
            Ok(())
        } else {
            Err( OdinGmtError::ModuleError {
                module: module.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy( &output.stderr).trim().to_string()
            })
        }
    }

    fn temp_output (&self, suffix: &str)->Result<TempOutput> {
        TempOutput::new( self.tmp_dir.as_deref(), suffix)
    }

    fn default_verbosity (&self)->Option<Verbosity> { self.verbosity }
}
