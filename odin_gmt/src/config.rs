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

use std::{fs, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};

use crate::{args::Verbosity, errors::Result};

/// how to reach GMT. Loaded from a RON file such as
/// ```ron
/// GmtConfig(
///     gmt_cmd: "/opt/gmt/bin/gmt",
///     tmp_dir: Some("/tmp/odin_gmt"),
///     verbosity: Some(Warning),
/// )
/// ```
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GmtConfig {
    /// the GMT executable (looked up in PATH if not absolute)
    #[serde(default = "default_gmt_cmd")]
    pub gmt_cmd: String,

    /// where virtual files and temporary module output are created (system temp dir if not set)
    #[serde(default)]
    pub tmp_dir: Option<PathBuf>,

    /// verbosity used for module calls that don't set their own
    #[serde(default)]
    pub verbosity: Option<Verbosity>,
}

fn default_gmt_cmd()->String { "gmt".into() }

impl Default for GmtConfig {
    fn default()->Self {
        GmtConfig { gmt_cmd: default_gmt_cmd(), tmp_dir: None, verbosity: None }
    }
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<GmtConfig> {
    let data = fs::read_to_string( path.as_ref())?;
    Ok( ron::from_str( &data)? )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config () {
        let config: GmtConfig = ron::from_str( r#"GmtConfig( gmt_cmd: "/usr/local/bin/gmt", verbosity: Some(Warning) )"#).unwrap();
        assert_eq!( config.gmt_cmd, "/usr/local/bin/gmt");
        assert_eq!( config.verbosity, Some(Verbosity::Warning));
        assert!( config.tmp_dir.is_none());

        let config: GmtConfig = ron::from_str( "GmtConfig()").unwrap();
        assert_eq!( config.gmt_cmd, "gmt");
    }
}
