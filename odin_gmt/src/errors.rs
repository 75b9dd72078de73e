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
use thiserror::Error;
use csv;
use ron;

pub type Result<T> = std::result::Result<T, OdinGmtError>;

#[derive(Error,Debug)]
pub enum OdinGmtError {

    /// input that can't be turned into a GMT module call (wrong data kind, bad flags, missing outfile)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// the external GMT module ran but reported a failure. This is passed through as is
    #[error("GMT module '{module}' failed with {status}: {stderr}")]
    ModuleError { module: String, status: String, stderr: String },

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("csv error {0}")]
    CsvError( #[from] csv::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("operation failed {0}")]
    OpFailedError(String),
}

impl OdinGmtError {
    pub fn is_invalid_input (&self)->bool {
        matches!( self, OdinGmtError::InvalidInput(_))
    }
}

macro_rules! invalid_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinGmtError::InvalidInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_input;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinGmtError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
