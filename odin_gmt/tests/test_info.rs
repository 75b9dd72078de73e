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

mod common;

use std::{fs, path::Path};
use tempfile::TempDir;
use odin_gmt::{info, InfoOptions, InfoOutput, Points, Result, Table};
use common::MockSession;

/// run with "cargo test --test test_info -- --nocapture"

fn track ()->Table {
    Table::from_rows( &["lon","lat"], &[vec![-122.4, 37.5], vec![-121.1, 38.9]]).unwrap()
}

#[test]
fn test_text_output ()->Result<()> {
    let table = track();
    let text = "odin_gmt-vf.tsv: N = 2\t<-122.4/-121.1>\t<37.5/38.9>\n";
    let mut session = MockSession::with_output( text);

    let out = info( &mut session, Points::Table(&table), &InfoOptions::default())?;
    assert_eq!( out, InfoOutput::Text( text.to_string()));
    assert_eq!( session.calls[0].0, "info");
    assert_eq!( session.n_staged, 1);
    Ok(())
}

#[test]
fn test_region_output ()->Result<()> {
    let table = track();
    let mut session = MockSession::with_output("-R-123/-121/37/39\n");
    let opts = InfoOptions { spacing: Some(vec![1.0]), ..Default::default() };

    let out = info( &mut session, Points::Table(&table), &opts)?;
    assert_eq!( out, InfoOutput::Numbers( vec![ vec![-123.0, -121.0, 37.0, 39.0]]));
    assert!( session.last_args().contains(" -I1 ->"));
    Ok(())
}

#[test]
fn test_per_column_file ()->Result<()> {
    let dir = TempDir::new()?;
    let infile = dir.path().join("track.txt");
    fs::write( &infile, "-122.4\t37.5\n-121.1\t38.9\n")?;
    let mut session = MockSession::with_output("-122.4\t-121.1\t37.5\t38.9\n");
    let opts = InfoOptions { per_column: true, ..Default::default() };

    let out = info( &mut session, Points::File(&infile), &opts)?;
    assert_eq!( out, InfoOutput::Numbers( vec![ vec![-122.4, -121.1, 37.5, 38.9]]));
    assert_eq!( session.n_staged, 0);
    assert!( session.last_args().starts_with( &format!("{} -C ->", infile.display())));
    Ok(())
}

#[test]
fn test_no_input () {
    let mut session = MockSession::with_output("");
    let res = info( &mut session, Points::None, &InfoOptions::default());
    assert!( res.unwrap_err().is_invalid_input());
    assert!( session.calls.is_empty());
}
