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
#![cfg(unix)]

use std::fs;
use tempfile::TempDir;
use odin_gmt::{project, GmtCli, GmtConfig, GmtSession, OdinGmtError, Points, ProjectOptions, Result, Table};

/// these use standard unix commands in place of the gmt executable
/// run with "cargo test --test test_cli_session -- --nocapture"

fn cli (cmd: &str, dir: &TempDir)->GmtCli {
    GmtCli::new( &GmtConfig { gmt_cmd: cmd.into(), tmp_dir: Some( dir.path().to_path_buf()), verbosity: None })
}

#[test]
fn test_redirect ()->Result<()> {
    let dir = TempDir::new()?;
    let mut session = cli( "echo", &dir);
    let out = session.temp_output(".csv")?;

    session.call_module( "project", &format!("-C0/0 -A45 {}", out.redirect()?))?;
    assert_eq!( out.read_to_string()?, "project -C0/0 -A45\n");
    assert!( out.path().starts_with( dir.path()));
    Ok(())
}

#[test]
fn test_staged_table ()->Result<()> {
    let dir = TempDir::new()?;
    let mut session = cli( "echo", &dir);
    let table = Table::from_rows( &["x","y"], &[vec![1.0, 2.0]])?;

    let vf = session.virtualfile_from_table( &table)?;
    assert!( vf.path().starts_with( dir.path()));
    assert_eq!( fs::read_to_string( vf.path())?, "1\t2\n");
    Ok(())
}

#[test]
fn test_module_failure () {
    let dir = TempDir::new().unwrap();
    let mut session = cli( "false", &dir);

    match session.call_module( "project", "-C0/0") {
        Err(OdinGmtError::ModuleError{ module, .. }) => assert_eq!( module, "project"),
        other => panic!("expected module error, got {other:?}")
    }
}

#[test]
fn test_missing_executable () {
    let dir = TempDir::new().unwrap();
    let mut session = cli( "/nonexistent/gmt", &dir);

    assert!( matches!( session.call_module( "info", "-C"), Err(OdinGmtError::IOError(_))));
}

#[test]
fn test_outfile_with_space ()->Result<()> {
    let dir = TempDir::new()?;
    let mut session = cli( "echo", &dir);
    let table = Table::from_rows( &["lon","lat"], &[vec![1.0, 2.0]])?;
    let outfile = dir.path().join("out file.tsv");

    let res = project( &mut session, Points::Table(&table), [0.0, 0.0], Some(&outfile), &ProjectOptions::default());
    assert!( res.unwrap_err().is_invalid_input());

    // nothing written, neither the requested file nor the part before the space
    assert!( !outfile.exists());
    assert!( !dir.path().join("out").exists());
    Ok(())
}

#[test]
fn test_tmp_dir_with_space ()->Result<()> {
    let dir = TempDir::new()?;
    let tmp_dir = dir.path().join("my dir");
    fs::create_dir( &tmp_dir)?;
    let mut session = GmtCli::new( &GmtConfig { gmt_cmd: "echo".into(), tmp_dir: Some( tmp_dir.clone()), verbosity: None });
    let table = Table::from_rows( &["lon","lat"], &[vec![1.0, 2.0]])?;

    let res = project( &mut session, Points::Table(&table), [0.0, 0.0], None, &ProjectOptions::default());
    assert!( res.unwrap_err().is_invalid_input());

    assert!( !dir.path().join("my").exists());
    assert_eq!( fs::read_dir( &tmp_dir)?.count(), 0); // temp files are cleaned up
    Ok(())
}
