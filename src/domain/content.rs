// 內建的作品集資料，沒有提供 TOML 設定時使用

use crate::domain::model::{Portfolio, Profile, Project, SkillTag};

pub fn profile() -> Profile {
    Profile {
        name: "Muhammed Shameem P".to_string(),
        role: "Frontend Developer".to_string(),
        tagline: "Building user-first, high-quality web apps with React & Next.js".to_string(),
        location: "India".to_string(),
        email: "me.muhammedshameem@gmail.com".to_string(),
        linkedin: "https://www.linkedin.com/in/mushameem".to_string(),
        github: "https://github.com/mushameem".to_string(),
        resume: "/shameem.docx".to_string(),
        resume_filename: "shameem.docx".to_string(),
        avatar: "image/avatar.jpg".to_string(),
        availability: "Available for frontend roles • Remote or India".to_string(),
    }
}

pub fn skills() -> Vec<SkillTag> {
    [
        "HTML",
        "CSS",
        "React.js",
        "Next.js",
        "JavaScript",
        "Tailwind CSS",
        "Chakra UI",
        "API Integration",
        "Performance",
        "Web 3.0",
    ]
    .into_iter()
    .map(SkillTag::from)
    .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "nft-minting-app".to_string(),
            title: "RobPunks NFT Mint".to_string(),
            description: "A full NFT mint website to and mint robPunksNFTs on the goerli testnet."
                .to_string(),
            stack: strings(&["React.js", "Tailwind", "Blockchain", "Framer Motion"]),
            image: "image/robpunks.png".to_string(),
            github: "https://github.com/shameem8ods/web3-RobPunksFullMintNFt".to_string(),
            live: "https://web3-rob-punks-full-mint-nft.vercel.app/".to_string(),
        },
        Project {
            id: "amazon-clone".to_string(),
            title: "Amazon Clone".to_string(),
            description: "A responsive front-end clone of Amazon focused on product listing and cart interactions"
                .to_string(),
            stack: strings(&["React.js", "Firebase", "Emotion"]),
            image: "image/amazon.png".to_string(),
            github: "https://github.com/shameem8ods/Amazon_clone".to_string(),
            live: "https://amazon-clone-nine-roan.vercel.app".to_string(),
        },
        Project {
            id: "multi-wallet-connect".to_string(),
            title: "Multi Wallet Connect".to_string(),
            description: "A Decentralized multi wallet connect that supports metamask, coinbase, wallet connect, Formatic, Portis and Torus"
                .to_string(),
            stack: strings(&["Next.js", "Chakra UI", "Web3.0"]),
            image: "image/multi.png".to_string(),
            github: "https://github.com/shameem8ods/Web3-multiWalletConnect".to_string(),
            // 沒有 scheme，照原樣保留
            live: "web3-token-farm-ntmg.vercel.app".to_string(),
        },
    ]
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: profile(),
        skills: skills(),
        projects: projects(),
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        portfolio()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
