use clap::{Parser, Subcommand};

/// DhanRakshak - personal finance literacy toolkit
#[derive(Parser)]
#[command(name = "dhanrakshak")]
#[command(about = "Financial calculators, tutorials and quizzes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the JSON API server
    ///
    /// The coach endpoints read COACH_BACKEND, COACH_HOST, COACH_MODEL and
    /// COACH_API_KEY from the environment.
    Serve {
        #[arg(long, env = "DHANRAKSHAK_PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Monthly loan instalment
    Emi {
        #[arg(long, help = "Loan amount")]
        principal: f64,
        #[arg(long, help = "Annual interest rate, percent")]
        rate: f64,
        #[arg(long, help = "Tenure in years")]
        tenure: u32,
    },

    /// Future value of a monthly SIP
    Sip {
        #[arg(long, help = "Monthly investment")]
        monthly_investment: f64,
        #[arg(long, help = "Expected annual return, percent")]
        return_rate: f64,
        #[arg(long, help = "Investment period in years")]
        period: u32,
    },

    /// Fixed deposit maturity
    Fd {
        #[arg(long)]
        principal: f64,
        #[arg(long, help = "Annual interest rate, percent")]
        rate: f64,
        #[arg(long, help = "Tenure in years")]
        tenure: u32,
        #[arg(long, help = "Compounding periods per year (1, 2, 4 or 12)")]
        compounding: Option<u32>,
    },

    /// Public Provident Fund maturity
    Ppf {
        #[arg(long, help = "Yearly investment (500 to 1,50,000)")]
        yearly_investment: f64,
        #[arg(long, help = "Annual interest rate, percent (default 7.1)")]
        rate: Option<f64>,
        #[arg(long, help = "Period in years, at least 15 (default 15)")]
        period: Option<u32>,
    },

    /// Retirement corpus from monthly savings
    Retirement {
        #[arg(long)]
        current_age: u32,
        #[arg(long)]
        retirement_age: u32,
        #[arg(long)]
        monthly_savings: f64,
        #[arg(long, help = "Expected annual return, percent")]
        return_rate: f64,
    },

    /// Income tax under the new regime (FY 2023-24)
    Tax {
        #[arg(long)]
        annual_income: f64,
    },

    /// Monthly saving needed to reach a goal
    Savings {
        #[arg(long)]
        goal_amount: f64,
        #[arg(long, help = "Amount already saved (default 0)")]
        initial_amount: Option<f64>,
        #[arg(long)]
        years: u32,
    },

    /// List tutorial topics, or show one by slug
    Topics {
        /// Topic slug, e.g. tax-planning
        slug: Option<String>,
    },

    /// List the fraud awareness scenarios
    Fraud,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_fd_with_default_compounding() {
        let cli = Cli::try_parse_from([
            "dhanrakshak",
            "fd",
            "--principal",
            "10000",
            "--rate",
            "7",
            "--tenure",
            "1",
        ])
        .expect("parse");
        match cli.command {
            Commands::Fd { compounding, .. } => assert_eq!(compounding, None),
            _ => panic!("expected fd"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["dhanrakshak", "topics", "budgeting", "-v"]).expect("parse");
        assert!(cli.verbose);
        match cli.command {
            Commands::Topics { slug } => assert_eq!(slug.as_deref(), Some("budgeting")),
            _ => panic!("expected topics"),
        }
    }
}
