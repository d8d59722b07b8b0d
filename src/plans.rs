use crate::models::Category;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DietPlan {
    pub goal: &'static str,
    pub meals: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct WorkoutPlan {
    pub category: Category,
    pub exercises: &'static [&'static str],
}

pub const DIET_PLANS: &[DietPlan] = &[
    DietPlan {
        goal: "Weight Loss",
        meals: &[
            "Oatmeal with berries",
            "Grilled chicken salad",
            "Vegetable soup",
            "Brown rice with steamed vegetables",
        ],
    },
    DietPlan {
        goal: "Muscle Gain",
        meals: &[
            "Egg omelet with toast",
            "Chicken breast with quinoa",
            "Protein shake",
            "Salmon with sweet potato",
        ],
    },
    DietPlan {
        goal: "Endurance",
        meals: &[
            "Banana smoothie",
            "Pasta with lean meat",
            "Mixed nuts and yogurt",
            "Lentil curry with rice",
        ],
    },
];

pub const WORKOUT_PLANS: &[WorkoutPlan] = &[
    WorkoutPlan {
        category: Category::WarmUp,
        exercises: &["5 min jog", "Jumping jacks", "Arm circles", "Leg swings"],
    },
    WorkoutPlan {
        category: Category::Workout,
        exercises: &["Push-ups", "Squats", "Plank", "Lunges", "Burpees"],
    },
    WorkoutPlan {
        category: Category::CoolDown,
        exercises: &["Slow walking", "Hamstring stretch", "Deep breathing", "Yoga pose"],
    },
];

/// Plans for the categories this deployment offers, in the same order.
pub fn workout_plans_for(categories: &[Category]) -> Vec<&'static WorkoutPlan> {
    categories
        .iter()
        .filter_map(|category| WORKOUT_PLANS.iter().find(|plan| plan.category == *category))
        .collect()
}
