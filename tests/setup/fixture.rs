use goalify_client::GOALIFY_ID;
use litesvm::LiteSVM;
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use utils::Utils;

use crate::setup::test_data::*;
use crate::setup::Instructions;

pub struct TestFixture {
    pub svm: LiteSVM,
    pub program_id: Pubkey,
    pub payer: Keypair,

    // One keypair per role, plus someone holding none of them
    pub staker: Keypair,
    pub sponsor: Keypair,
    pub judge: Keypair,
    pub outsider: Keypair,
}

impl TestFixture {
    pub fn new() -> Self {
        let mut svm = LiteSVM::new();

        let program_id = svm.deploy_program_from_id(GOALIFY_ID, GOALIFY_SO_PATH);

        let payer = Keypair::new();
        svm.airdrop(&payer.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund payer");

        let staker = Keypair::new();
        svm.airdrop(&staker.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund staker");

        let sponsor = Keypair::new();
        svm.airdrop(&sponsor.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund sponsor");

        let judge = Keypair::new();
        svm.airdrop(&judge.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund judge");

        let outsider = Keypair::new();
        svm.airdrop(&outsider.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund outsider");

        Self {
            svm,
            program_id,
            payer,
            staker,
            sponsor,
            judge,
            outsider,
        }
    }

    pub fn create_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.svm
            .airdrop(&keypair.pubkey(), LAMPORTS_PER_SOL * 10)
            .expect("Failed to fund keypair");
        keypair
    }

    pub fn with_initialize_registry(mut self) -> Self {
        let payer = self.payer.insecure_clone();
        let result = self.initialize_registry(&payer);
        assert!(result.is_ok(), "Failed to initialize registry");
        self
    }

    pub fn with_create_goal(mut self) -> Self {
        let staker = self.staker.insecure_clone();
        let result = self.create_goal(
            &staker,
            DEFAULT_GOAL_STATEMENT.to_string(),
            DEFAULT_BET_SIZE,
            DEFAULT_DURATION,
        );
        assert!(result.is_ok(), "Failed to create goal: {:#?}", result);
        self
    }

    pub fn with_set_sponsor(mut self, goal_id: u64) -> Self {
        let sponsor = self.sponsor.insecure_clone();
        let result = self.set_sponsor(&sponsor, goal_id);
        assert!(result.is_ok(), "Failed to set sponsor: {:#?}", result);
        self
    }

    pub fn with_set_judge(mut self, goal_id: u64) -> Self {
        let judge = self.judge.insecure_clone();
        let result = self.set_judge(&judge, goal_id);
        assert!(result.is_ok(), "Failed to set judge: {:#?}", result);
        self
    }

    /// Registry, goal 0 and both counter-parties in place.
    pub fn with_staffed_goal(self) -> Self {
        self.with_initialize_registry()
            .with_create_goal()
            .with_set_sponsor(0)
            .with_set_judge(0)
    }

    pub fn with_staker_bet(mut self, goal_id: u64, value: u64) -> Self {
        let staker = self.staker.insecure_clone();
        let result = self.bet(&staker, goal_id, value);
        assert!(result.is_ok(), "Failed to place staker bet: {:#?}", result);
        self
    }

    pub fn with_sponsor_bet(mut self, goal_id: u64, value: u64) -> Self {
        let sponsor = self.sponsor.insecure_clone();
        let result = self.bet(&sponsor, goal_id, value);
        assert!(result.is_ok(), "Failed to place sponsor bet: {:#?}", result);
        self
    }

    pub fn with_elapsed_duration(mut self) -> Self {
        self.svm.warp_seconds(DEFAULT_DURATION + 1);
        self
    }

    pub fn with_decision(mut self, goal_id: u64, decision: u8) -> Self {
        let judge = self.judge.insecure_clone();
        let result = self.approve(&judge, goal_id, decision);
        assert!(result.is_ok(), "Failed to approve goal: {:#?}", result);
        self
    }
}
