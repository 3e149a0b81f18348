use std::io::{BufRead, Write};

use validator::Validate;

use crate::utils::{app_error::AppError, prompt::prompt_line};

const API_KEY_PROMPT: &str = "Enter your Google Maps API key: ";
const FILE_PATH_PROMPT: &str = "Enter the file path of the xlsx file: ";

#[derive(Validate, Debug)]
pub struct RunConfig {
    #[validate(length(min = 1, message = "API key must not be empty"))]
    pub api_key: String,

    #[validate(length(min = 1, message = "File path must not be empty"))]
    pub file_path: String,
}

impl RunConfig {
    /// Asks for the API key, then the workbook path.
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self, AppError> {
        let api_key = prompt_line(input, output, API_KEY_PROMPT).map_err(AppError::Prompt)?;
        let file_path = prompt_line(input, output, FILE_PATH_PROMPT).map_err(AppError::Prompt)?;

        let config = RunConfig { api_key, file_path };

        config
            .validate()
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        Ok(config)
    }
}
