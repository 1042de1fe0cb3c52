//! Small fixed texts for the daily planner screens.

pub static FORTUNES: [&str; 6] = [
    "Start now and focus mode switches on!",
    "Today your wrong answers turn into treasure.",
    "Explain it to a friend and understanding doubles.",
    "Short and intense! Sprints are the most efficient today.",
    "Drink plenty of water. Your brain will thank you.",
    "Just the essentials! A summary is your winning move.",
];

pub static CHECKLIST: [&str; 4] = [
    "Summarize three key concepts",
    "Solve 20 active-recall questions",
    "Write one line on why each wrong answer was wrong",
    "Spend five minutes wrapping up and pick tomorrow's first task",
];
