//! Built-in tutorial catalog and fraud-awareness scenarios.
//!
//! Everything here is compiled into the binary and never mutated.

use serde::Serialize;

use super::types::TopicSlug;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LessonSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// `correct_answer` is always one of `options`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TutorialTopic {
    pub slug: TopicSlug,
    pub title: &'static str,
    pub description: &'static str,
    pub sections: &'static [LessonSection],
    pub quiz: &'static [QuizQuestion],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicOverview {
    pub slug: TopicSlug,
    pub title: &'static str,
    pub description: &'static str,
    pub question_count: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioDetail {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FraudScenario {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [ScenarioDetail],
    pub tips: &'static [&'static str],
}

/// Slugs in declaration order.
pub fn list_topics() -> Vec<TopicSlug> {
    TOPICS.iter().map(|topic| topic.slug).collect()
}

pub fn topics() -> &'static [TutorialTopic] {
    &TOPICS
}

pub fn topic_overviews() -> Vec<TopicOverview> {
    TOPICS
        .iter()
        .map(|topic| TopicOverview {
            slug: topic.slug,
            title: topic.title,
            description: topic.description,
            question_count: topic.quiz.len(),
        })
        .collect()
}

pub fn get_topic(slug: &str) -> Result<&'static TutorialTopic> {
    slug.parse::<TopicSlug>().map(topic)
}

pub fn topic(slug: TopicSlug) -> &'static TutorialTopic {
    // TOPICS is declared in TopicSlug order.
    &TOPICS[slug as usize]
}

pub fn fraud_scenarios() -> &'static [FraudScenario] {
    &FRAUD_SCENARIOS
}

pub fn get_fraud_scenario(key: &str) -> Result<&'static FraudScenario> {
    FRAUD_SCENARIOS
        .iter()
        .find(|scenario| scenario.key == key)
        .ok_or_else(|| Error::NotFound(format!("fraud scenario '{key}'")))
}

static TOPICS: [TutorialTopic; 4] = [
    TutorialTopic {
        slug: TopicSlug::Budgeting,
        title: "Budgeting 101",
        description: "Master the art of creating and sticking to a budget to achieve your financial goals.",
        sections: &[
            LessonSection {
                title: "What is a Budget?",
                body: "A budget is a plan for your money. It helps you track your income (money you earn) and expenses (money you spend) over a period, typically a month. The goal is to ensure you don't spend more than you earn and can save for your goals.",
            },
            LessonSection {
                title: "The 50/30/20 Rule",
                body: "A popular budgeting guideline is the 50/30/20 rule. It suggests allocating 50% of your after-tax income to Needs (housing, groceries, utilities), 30% to Wants (dining out, entertainment), and 20% to Savings and Debt Repayment.",
            },
            LessonSection {
                title: "How to Track Expenses",
                body: "You can track expenses using various methods: simple pen and paper, a spreadsheet, or budgeting apps. The key is consistency. At the end of the month, categorize your spending to see where your money is going.",
            },
        ],
        quiz: &[
            QuizQuestion {
                question: "What is the main purpose of a budget?",
                options: &[
                    "To limit all fun spending",
                    "To track income and expenses",
                    "To get a credit card",
                ],
                correct_answer: "To track income and expenses",
            },
            QuizQuestion {
                question: "In the 50/30/20 rule, what does the 20% represent?",
                options: &["Needs", "Wants", "Savings & Debt Repayment"],
                correct_answer: "Savings & Debt Repayment",
            },
            QuizQuestion {
                question: "Which of the following is typically considered a \"Need\"?",
                options: &["Concert tickets", "Rent or mortgage payment", "A new video game"],
                correct_answer: "Rent or mortgage payment",
            },
            QuizQuestion {
                question: "An expense that can change from month to month, like groceries, is called a...",
                options: &["Fixed expense", "Variable expense", "Recurring expense"],
                correct_answer: "Variable expense",
            },
            QuizQuestion {
                question: "What is a good first step when you want to create a budget?",
                options: &[
                    "Guessing your spending",
                    "Tracking your income and expenses for a month",
                    "Cutting all subscriptions",
                ],
                correct_answer: "Tracking your income and expenses for a month",
            },
            QuizQuestion {
                question: "What is an \"emergency fund\"?",
                options: &[
                    "Money for a vacation",
                    "Money set aside for unexpected costs",
                    "Your primary investment account",
                ],
                correct_answer: "Money set aside for unexpected costs",
            },
            QuizQuestion {
                question: "In the 50/30/20 rule, what category does your monthly streaming service subscription fall into?",
                options: &["Needs", "Wants", "Savings"],
                correct_answer: "Wants",
            },
            QuizQuestion {
                question: "Why is it important to review your budget regularly?",
                options: &[
                    "It's not important",
                    "To adjust for changes in your life or goals",
                    "To impress your friends",
                ],
                correct_answer: "To adjust for changes in your life or goals",
            },
            QuizQuestion {
                question: "An example of a fixed expense is:",
                options: &["Dining out", "Gas for your car", "Your monthly car payment"],
                correct_answer: "Your monthly car payment",
            },
            QuizQuestion {
                question: "What is the primary benefit of tracking your expenses?",
                options: &[
                    "It automatically makes you richer",
                    "It shows you exactly where your money is going",
                    "It is a requirement for opening a bank account",
                ],
                correct_answer: "It shows you exactly where your money is going",
            },
        ],
    },
    TutorialTopic {
        slug: TopicSlug::Investing,
        title: "Investing Basics",
        description: "Learn the fundamental principles of investing to grow your wealth over time.",
        sections: &[
            LessonSection {
                title: "What is Investing?",
                body: "Investing is the process of buying assets that are expected to increase in value over time and provide income. Unlike saving, investing involves taking on risk with the potential for higher returns. Common investments include stocks, bonds, and real estate.",
            },
            LessonSection {
                title: "Risk and Return",
                body: "The principle of risk and return states that assets with higher potential returns come with higher risk. It's crucial to understand your risk tolerance before investing. Diversification, or spreading your investments across different assets, can help manage risk.",
            },
            LessonSection {
                title: "Compound Interest",
                body: "Compound interest is the interest you earn on both your initial investment and the accumulated interest. Albert Einstein called it the \"eighth wonder of the world.\" The earlier you start investing, the more time your money has to grow through compounding.",
            },
        ],
        quiz: &[
            QuizQuestion {
                question: "What is diversification in investing?",
                options: &[
                    "Putting all money in one stock",
                    "Spreading investments across different assets",
                    "Only investing in bonds",
                ],
                correct_answer: "Spreading investments across different assets",
            },
            QuizQuestion {
                question: "What is a key benefit of starting to invest early?",
                options: &["Higher risk", "Guaranteed returns", "The power of compound interest"],
                correct_answer: "The power of compound interest",
            },
            QuizQuestion {
                question: "What is a stock?",
                options: &[
                    "A loan to a company",
                    "A share of ownership in a company",
                    "A type of savings account",
                ],
                correct_answer: "A share of ownership in a company",
            },
            QuizQuestion {
                question: "In investing, higher potential returns usually come with...",
                options: &["Lower risk", "No risk", "Higher risk"],
                correct_answer: "Higher risk",
            },
            QuizQuestion {
                question: "What is a bond?",
                options: &[
                    "A share of ownership in a government",
                    "A loan you make to a corporation or government",
                    "A type of high-risk stock",
                ],
                correct_answer: "A loan you make to a corporation or government",
            },
            QuizQuestion {
                question: "What is a mutual fund?",
                options: &[
                    "A single high-performing stock",
                    "A fund that only invests in real estate",
                    "A pool of money from many investors to buy a variety of assets",
                ],
                correct_answer: "A pool of money from many investors to buy a variety of assets",
            },
            QuizQuestion {
                question: "What is a \"bull market\"?",
                options: &[
                    "A market where prices are falling",
                    "A market where prices are rising",
                    "A market that is closed for the day",
                ],
                correct_answer: "A market where prices are rising",
            },
            QuizQuestion {
                question: "Is past performance of an investment a guarantee of future returns?",
                options: &["Yes, always", "No, it is not an indicator", "Only for bonds"],
                correct_answer: "No, it is not an indicator",
            },
            QuizQuestion {
                question: "What does \"risk tolerance\" refer to?",
                options: &[
                    "Your ability to tolerate losing money on an investment",
                    "Your knowledge of the stock market",
                    "The amount of money you have",
                ],
                correct_answer: "Your ability to tolerate losing money on an investment",
            },
            QuizQuestion {
                question: "What is the main advantage of compound interest?",
                options: &[
                    "It simplifies your tax returns",
                    "It guarantees you will never lose money",
                    "It allows your earnings to generate their own earnings",
                ],
                correct_answer: "It allows your earnings to generate their own earnings",
            },
        ],
    },
    TutorialTopic {
        slug: TopicSlug::Saving,
        title: "Super Savings",
        description: "Discover effective strategies to build your savings and secure your financial future.",
        sections: &[
            LessonSection {
                title: "Pay Yourself First",
                body: "This is a core savings principle. Before you pay bills or spend on anything else, set aside a portion of your income for savings. The easiest way to do this is to set up an automatic transfer from your checking account to your savings account each payday.",
            },
            LessonSection {
                title: "Set Specific Savings Goals",
                body: "It's easier to save when you have a clear goal. Instead of \"saving more,\" aim for a specific target, like \"save $5,000 for a down payment in 2 years.\" This makes your goal tangible and helps you stay motivated.",
            },
            LessonSection {
                title: "High-Yield Savings Accounts",
                body: "A high-yield savings account (HYSA) is a type of savings account that typically pays a much higher interest rate than a traditional savings account. Keeping your emergency fund or short-term savings in an HYSA can help your money grow faster.",
            },
        ],
        quiz: &[
            QuizQuestion {
                question: "What does \"Pay Yourself First\" mean?",
                options: &[
                    "Buy yourself a treat",
                    "Prioritize saving before other expenses",
                    "Pay off your highest interest debt first",
                ],
                correct_answer: "Prioritize saving before other expenses",
            },
            QuizQuestion {
                question: "Why is a High-Yield Savings Account a good choice for an emergency fund?",
                options: &[
                    "It has high fees",
                    "It offers a higher interest rate than traditional accounts",
                    "It is a type of stock investment",
                ],
                correct_answer: "It offers a higher interest rate than traditional accounts",
            },
            QuizQuestion {
                question: "What is the benefit of automating your savings?",
                options: &[
                    "It makes saving a consistent habit",
                    "It is the only way to save money",
                    "It gives you lower interest rates",
                ],
                correct_answer: "It makes saving a consistent habit",
            },
            QuizQuestion {
                question: "Having a specific savings goal helps you to...",
                options: &[
                    "Spend more money",
                    "Stay motivated and track progress",
                    "Ignore your budget",
                ],
                correct_answer: "Stay motivated and track progress",
            },
            QuizQuestion {
                question: "An emergency fund should typically cover how many months of living expenses?",
                options: &["1 week", "1 year", "3-6 months"],
                correct_answer: "3-6 months",
            },
            QuizQuestion {
                question: "What is the main difference between saving and investing?",
                options: &[
                    "There is no difference",
                    "Saving is for long-term goals, investing is for short-term",
                    "Saving is generally lower risk, while investing involves taking on risk for potential growth",
                ],
                correct_answer: "Saving is generally lower risk, while investing involves taking on risk for potential growth",
            },
            QuizQuestion {
                question: "Which of these is a good example of a short-term savings goal?",
                options: &[
                    "Retirement in 30 years",
                    "Saving for a vacation next year",
                    "Buying a stock",
                ],
                correct_answer: "Saving for a vacation next year",
            },
            QuizQuestion {
                question: "How can cutting small, regular expenses (like a daily coffee) impact your savings?",
                options: &[
                    "It has no impact",
                    "It can add up to a significant amount over time",
                    "It only works if you are rich",
                ],
                correct_answer: "It can add up to a significant amount over time",
            },
            QuizQuestion {
                question: "Where is the best place to keep your emergency fund?",
                options: &[
                    "In a checking account",
                    "Under your mattress",
                    "In a separate, easily accessible savings account",
                ],
                correct_answer: "In a separate, easily accessible savings account",
            },
            QuizQuestion {
                question: "What does \"S.M.A.R.T.\" stand for in goal setting?",
                options: &[
                    "Simple, Measurable, Attainable, Relevant, Time-bound",
                    "Specific, Measurable, Achievable, Relevant, Time-bound",
                    "Specific, Meaningful, Action-oriented, Realistic, Timely",
                ],
                correct_answer: "Specific, Measurable, Achievable, Relevant, Time-bound",
            },
        ],
    },
    TutorialTopic {
        slug: TopicSlug::TaxPlanning,
        title: "Tax Planning",
        description: "An introduction to tax planning to help you understand and potentially reduce your tax burden.",
        sections: &[
            LessonSection {
                title: "What is Tax Planning?",
                body: "Tax planning is the analysis of a financial situation or plan to ensure that all elements work together to allow you to pay the lowest taxes possible. It involves understanding different types of taxes, deductions, and credits.",
            },
            LessonSection {
                title: "Tax Deductions vs. Tax Credits",
                body: "A tax deduction reduces your taxable income, lowering your tax bill based on your tax bracket. A tax credit, on the other hand, directly reduces the amount of tax you owe, dollar-for-dollar. A credit is generally more valuable than a deduction of the same amount.",
            },
            LessonSection {
                title: "Retirement Accounts and Taxes",
                body: "Contributing to tax-advantaged retirement accounts like a 401(k) or a traditional IRA can be a powerful tax-planning tool. Contributions to these accounts are often tax-deductible, reducing your taxable income for the year.",
            },
        ],
        quiz: &[
            QuizQuestion {
                question: "Which is generally more valuable for reducing your tax bill?",
                options: &["A $100 tax deduction", "A $100 tax credit", "They are the same"],
                correct_answer: "A $100 tax credit",
            },
            QuizQuestion {
                question: "How can contributing to a traditional 401(k) help with taxes?",
                options: &[
                    "It increases your taxable income",
                    "It can reduce your taxable income",
                    "It has no effect on taxes",
                ],
                correct_answer: "It can reduce your taxable income",
            },
            QuizQuestion {
                question: "What is a tax deduction?",
                options: &[
                    "A direct reduction of your tax bill",
                    "An amount that lowers your taxable income",
                    "Money the government gives you for fun",
                ],
                correct_answer: "An amount that lowers your taxable income",
            },
            QuizQuestion {
                question: "What is your \"taxable income\"?",
                options: &[
                    "Your total salary before any deductions",
                    "The portion of your income that taxes are calculated on",
                    "The amount of your tax refund",
                ],
                correct_answer: "The portion of your income that taxes are calculated on",
            },
            QuizQuestion {
                question: "Which of these is an example of a tax credit?",
                options: &[
                    "Student loan interest deduction",
                    "Child Tax Credit",
                    "401(k) contribution",
                ],
                correct_answer: "Child Tax Credit",
            },
            QuizQuestion {
                question: "When are taxes typically due in the United States?",
                options: &["December 31st", "January 1st", "April 15th"],
                correct_answer: "April 15th",
            },
            QuizQuestion {
                question: "What is a W-2 form?",
                options: &[
                    "A form you fill out to start a business",
                    "A form from your employer showing your annual wages and taxes withheld",
                    "A form for reporting investment income",
                ],
                correct_answer: "A form from your employer showing your annual wages and taxes withheld",
            },
            QuizQuestion {
                question: "A Roth IRA is different from a Traditional IRA in that...",
                options: &[
                    "Contributions are pre-tax, and withdrawals are taxed",
                    "Contributions are post-tax, and qualified withdrawals are tax-free",
                    "There are no differences",
                ],
                correct_answer: "Contributions are post-tax, and qualified withdrawals are tax-free",
            },
            QuizQuestion {
                question: "What is a capital gains tax?",
                options: &[
                    "A tax on your salary",
                    "A tax on the profit from selling an asset, like a stock",
                    "A tax on gifts you receive",
                ],
                correct_answer: "A tax on the profit from selling an asset, like a stock",
            },
            QuizQuestion {
                question: "What is the standard deduction?",
                options: &[
                    "A fixed dollar amount that you can subtract from your income",
                    "A variable amount based on your investments",
                    "A credit for having a job",
                ],
                correct_answer: "A fixed dollar amount that you can subtract from your income",
            },
        ],
    },
];

static FRAUD_SCENARIOS: [FraudScenario; 3] = [
    FraudScenario {
        key: "phishing",
        title: "Phishing Email",
        description: "A scammer sends a fake email pretending to be from your bank.",
        details: &[
            ScenarioDetail {
                label: "From",
                text: "Your Bank Security <security-update@y0urbank.com>",
            },
            ScenarioDetail {
                label: "Subject",
                text: "Urgent: Action Required on Your Account",
            },
            ScenarioDetail {
                label: "Body",
                text: "Dear Customer,\n\nWe detected suspicious activity on your account. Please click the link below to verify your identity immediately. Failure to do so will result in account suspension.\n\n[Link: http://yourbank-security-check.ru/login]\n\nThank you,\nYour Bank Security Team",
            },
        ],
        tips: &[
            "Check the sender's email address for typos or unusual domains.",
            "Hover over links to see the actual URL before clicking.",
            "Legitimate banks will never ask for sensitive info via email.",
        ],
    },
    FraudScenario {
        key: "otp",
        title: "OTP Scam",
        description: "A scammer calls you pretending to be a representative and asks for an OTP.",
        details: &[
            ScenarioDetail {
                label: "Caller ID",
                text: "Unknown Number",
            },
            ScenarioDetail {
                label: "Dialogue",
                text: "Hi, I'm from DhanRakshak support. We are updating your KYC. You will receive a One-Time Password (OTP). Please share it with me to complete the process.",
            },
        ],
        tips: &[
            "NEVER share your OTP with anyone, including bank or company employees.",
            "Legitimate companies will never call you and ask for an OTP.",
            "If you receive such a call, hang up immediately and report the number.",
        ],
    },
    FraudScenario {
        key: "identity-theft",
        title: "Identity Theft",
        description: "Scammers steal your personal information to open accounts in your name.",
        details: &[ScenarioDetail {
            label: "Situation",
            text: "You receive a credit card bill for an account you never opened. Upon checking your credit report, you find several inquiries and new accounts you don't recognize.",
        }],
        tips: &[
            "Regularly check your credit report for unauthorized activity.",
            "Use strong, unique passwords for all your financial accounts.",
            "Be cautious about sharing personal information online or over the phone.",
        ],
    },
];
