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

//! odin_gmt - run [GMT](https://www.generic-mapping-tools.org) modules on in-memory tables.
//!
//! The module adapters in this crate ([`project`], [`info`]) translate typed option records into GMT
//! argument strings, execute the module through a [`GmtSession`] and parse the tab separated module output
//! back into a [`Table`]. All the actual computation is done by GMT

pub mod errors;
pub mod args;
pub mod table;
pub mod config;
pub mod session;
pub mod project;
pub mod info;

pub use errors::{OdinGmtError, Result};
pub use args::{ArgList, GmtOptions, Verbosity, parse_pair};
pub use table::{Table, Value, read_tsv, read_tsv_file, read_tsv_table};
pub use config::{GmtConfig, load_config};
pub use session::{GmtSession, GmtCli, VirtualFile, TempOutput};
pub use project::{project, build_project_args, output_column_names, Points, ProjectOptions, Generate, Length, Ellipse, EllipseShape, EllipseAdjust};
pub use info::{info, InfoOptions, InfoOutput, Registration};
